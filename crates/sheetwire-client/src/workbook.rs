//! Workbook handle: tab lifecycle and batch updates for one spreadsheet.

use std::fmt;
use std::sync::Arc;

use serde_json::Value as Json;
use sheetwire_api::requests;
use tracing::debug;

use crate::error::Result;
use crate::tab::Tab;
use crate::transport::{Session, SheetsTransport};

/// A handle to one existing spreadsheet document.
pub struct Workbook<T: SheetsTransport> {
    session: Arc<Session<T>>,
    spreadsheet_id: String,
    title: String,
}

impl<T: SheetsTransport> Workbook<T> {
    /// Open a workbook by its service-assigned id.
    ///
    /// Fetches the document title up front, partly to force a failure early
    /// when the id is wrong or inaccessible.
    pub async fn open(session: Arc<Session<T>>, spreadsheet_id: impl Into<String>) -> Result<Self> {
        let spreadsheet_id = spreadsheet_id.into();
        let svc = session.acquire().await?;
        let meta = svc
            .get_spreadsheet(&spreadsheet_id, None, Some("properties/title"), false)
            .await?;
        let title = meta.properties.map(|p| p.title).unwrap_or_default();
        debug!(spreadsheet_id = %spreadsheet_id, title = %title, "opened workbook");
        Ok(Workbook {
            session,
            spreadsheet_id,
            title,
        })
    }

    /// The document title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The service-assigned spreadsheet id
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Browser URL for this workbook
    pub fn url(&self) -> String {
        format!("https://docs.google.com/spreadsheets/d/{}", self.spreadsheet_id)
    }

    /// Names of all tabs in the workbook, in sheet order
    pub async fn tab_names(&self) -> Result<Vec<String>> {
        let svc = self.session.acquire().await?;
        let meta = svc
            .get_spreadsheet(
                &self.spreadsheet_id,
                None,
                Some("sheets/properties/title"),
                false,
            )
            .await?;
        Ok(meta
            .sheets
            .iter()
            .filter_map(|sheet| sheet.properties.as_ref().map(|p| p.title.clone()))
            .collect())
    }

    /// Get a handle to an existing tab by name
    pub async fn fetch_tab(&self, name: &str) -> Result<Tab<T>> {
        Tab::open(self.session.clone(), self.spreadsheet_id.clone(), name).await
    }

    /// Create a tab with the service-default grid size (1000 x 26)
    pub async fn create_tab(&self, name: &str) -> Result<Tab<T>> {
        self.create_tab_sized(name, requests::DEFAULT_TAB_ROWS, requests::DEFAULT_TAB_COLS)
            .await
    }

    /// Create a tab with an explicit grid size
    pub async fn create_tab_sized(&self, name: &str, nrows: u32, ncols: u32) -> Result<Tab<T>> {
        self.batch_update(vec![requests::add_sheet(name, nrows, ncols)])
            .await?;
        self.fetch_tab(name).await
    }

    /// Delete a tab by name
    pub async fn delete_tab(&self, name: &str) -> Result<()> {
        let tab = self.fetch_tab(name).await?;
        self.batch_update(vec![requests::delete_sheet(tab.sheet_id())])
            .await
    }

    /// Apply a list of request objects as one transactional batch update
    pub async fn batch_update(&self, reqs: Vec<Json>) -> Result<()> {
        debug!(spreadsheet_id = %self.spreadsheet_id, requests = reqs.len(), "batch update");
        let svc = self.session.acquire().await?;
        svc.batch_update(&self.spreadsheet_id, requests::batch_update_body(reqs))
            .await?;
        Ok(())
    }
}

impl<T: SheetsTransport> fmt::Debug for Workbook<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbook")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
