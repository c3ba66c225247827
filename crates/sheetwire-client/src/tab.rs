//! Tab handle: data fetch/upload and formatting for one sheet.

use std::fmt;
use std::sync::Arc;

use serde_json::Value as Json;
use sheetwire_api::{
    extract_rows, requests, tab_range, HorizontalAlign, SheetProperties, ValueInputOption,
    VerticalAlign,
};
use sheetwire_core::{split_blocks, CellValue, Grid, Record, Table, TableData};
use tracing::debug;

use crate::error::{Error, Result};
use crate::transport::{Session, SheetsTransport};

/// Field mask for data fetches: effective values plus the number format tag,
/// nothing else.
const FETCH_FIELDS: &str =
    "sheets/data/rowData/values(effectiveValue,effectiveFormat/numberFormat/type)";

/// A handle to one tab (sheet) of a workbook.
pub struct Tab<T: SheetsTransport> {
    session: Arc<Session<T>>,
    spreadsheet_id: String,
    name: String,
    properties: SheetProperties,
}

impl<T: SheetsTransport> Tab<T> {
    pub(crate) async fn open(
        session: Arc<Session<T>>,
        spreadsheet_id: String,
        name: &str,
    ) -> Result<Self> {
        let properties = Self::lookup_properties(&session, &spreadsheet_id, name).await?;
        Ok(Tab {
            session,
            spreadsheet_id,
            name: name.to_string(),
            properties,
        })
    }

    async fn lookup_properties(
        session: &Session<T>,
        spreadsheet_id: &str,
        name: &str,
    ) -> Result<SheetProperties> {
        let svc = session.acquire().await?;
        let meta = svc
            .get_spreadsheet(spreadsheet_id, None, Some("sheets/properties"), false)
            .await?;
        meta.sheets
            .into_iter()
            .filter_map(|sheet| sheet.properties)
            .find(|props| props.title == name)
            .ok_or_else(|| Error::TabNotFound(name.to_string()))
    }

    async fn refresh_properties(&mut self) -> Result<()> {
        self.properties =
            Self::lookup_properties(&self.session, &self.spreadsheet_id, &self.name).await?;
        Ok(())
    }

    /// The tab's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The numeric sheet id, stable across renames
    pub fn sheet_id(&self) -> i64 {
        self.properties.sheet_id
    }

    /// Declared row count of the grid
    pub fn nrows(&self) -> u32 {
        self.properties.grid_properties.row_count
    }

    /// Declared column count of the grid
    pub fn ncols(&self) -> u32 {
        self.properties.grid_properties.column_count
    }

    /// Browser URL for this tab
    pub fn url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}#gid={}",
            self.spreadsheet_id,
            self.sheet_id()
        )
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Fetch and normalize the tab's data.
    ///
    /// With `headers = true` the first populated row is consumed as the
    /// header row and sets the row width; otherwise the widest row does and
    /// positional headers are synthesized. Returns `None` when the tab holds
    /// no data at all.
    pub async fn fetch(&self, headers: bool) -> Result<Option<Grid>> {
        let svc = self.session.acquire().await?;
        let raw = svc
            .get_spreadsheet(
                &self.spreadsheet_id,
                Some(&tab_range(&self.name)),
                Some(FETCH_FIELDS),
                true,
            )
            .await?;
        let rows = match extract_rows(&raw) {
            Ok(rows) => rows,
            // A tab with no populated cells may come back with no grid block
            Err(sheetwire_api::Error::MissingGridData) => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(tab = %self.name, rows = rows.len(), "fetched raw rows");
        Ok(Grid::from_rows(rows, headers))
    }

    /// Fetch as a typed [`Table`]; empty when the tab holds no data
    pub async fn fetch_table(&self, headers: bool) -> Result<Table> {
        Ok(self
            .fetch(headers)
            .await?
            .map(Grid::into_table)
            .unwrap_or_default())
    }

    /// Fetch as ordered records; empty when the tab holds no data
    pub async fn fetch_records(&self, headers: bool) -> Result<Vec<Record>> {
        Ok(self
            .fetch(headers)
            .await?
            .map(Grid::into_records)
            .unwrap_or_default())
    }

    /// Fetch as a raw `(headers, rows)` pair; both empty when the tab holds
    /// no data
    pub async fn fetch_rows(&self, headers: bool) -> Result<(Vec<CellValue>, Vec<Vec<CellValue>>)> {
        Ok(self
            .fetch(headers)
            .await?
            .map(Grid::into_parts)
            .unwrap_or_default())
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Overwrite all data in the tab with `data`.
    ///
    /// Existing data is cleared first, even where the new data would not
    /// overwrite it. Headers are included in the upload. With `index`, a
    /// table's row-index columns are folded in as leading columns.
    pub async fn insert_data(
        &mut self,
        data: &TableData,
        index: bool,
        autoformat: bool,
    ) -> Result<()> {
        let (headers, values) = split_blocks(data, index)?;
        let n_headers = headers.len() as u32;

        let mut upload = headers;
        upload.extend(values);

        self.clear_data().await?;
        debug!(tab = %self.name, rows = upload.len(), "inserting data");
        let svc = self.session.acquire().await?;
        svc.values_update(
            &self.spreadsheet_id,
            &tab_range(&self.name),
            ValueInputOption::UserEntered,
            requests::values_body(&upload),
        )
        .await?;

        if autoformat {
            self.autoformat(n_headers).await?;
        }
        self.refresh_properties().await
    }

    /// Append `data` after the tab's existing data.
    ///
    /// Headers are dropped from the upload; they are assumed to already be
    /// among the existing tab data. The sheet grows automatically when the
    /// appended rows exceed its current dimensions.
    pub async fn append_data(
        &mut self,
        data: &TableData,
        index: bool,
        autoformat: bool,
    ) -> Result<()> {
        let (headers, values) = split_blocks(data, index)?;
        let n_headers = headers.len() as u32;

        debug!(tab = %self.name, rows = values.len(), "appending data");
        let svc = self.session.acquire().await?;
        svc.values_append(
            &self.spreadsheet_id,
            &tab_range(&self.name),
            ValueInputOption::UserEntered,
            requests::values_body(&values),
        )
        .await?;

        if autoformat {
            self.autoformat(n_headers).await?;
        }
        self.refresh_properties().await
    }

    /// Clear all data from the tab, leaving formatting intact
    pub async fn clear_data(&self) -> Result<()> {
        let svc = self.session.acquire().await?;
        svc.values_clear(&self.spreadsheet_id, &tab_range(&self.name))
            .await
    }

    // ========================================================================
    // Dimensions
    // ========================================================================

    /// Add `n` rows to the tab
    pub async fn add_rows(&mut self, n: u32) -> Result<()> {
        self.append_dimension(requests::Dimension::Rows, n).await
    }

    /// Add `n` columns to the tab
    pub async fn add_columns(&mut self, n: u32) -> Result<()> {
        self.append_dimension(requests::Dimension::Columns, n).await
    }

    async fn append_dimension(&mut self, dimension: requests::Dimension, n: u32) -> Result<()> {
        self.batch(vec![requests::append_dimension(self.sheet_id(), dimension, n)])
            .await?;
        self.refresh_properties().await
    }

    /// Set the tab's exact dimensions. A dimension left as `None` keeps its
    /// current value; shrinking below the populated extent discards data.
    pub async fn alter_dimensions(&mut self, nrows: Option<u32>, ncols: Option<u32>) -> Result<()> {
        let req = requests::update_grid_size(
            self.sheet_id(),
            nrows.unwrap_or_else(|| self.nrows()),
            ncols.unwrap_or_else(|| self.ncols()),
        );
        self.batch(vec![req]).await?;
        self.refresh_properties().await
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Resize every column's width to fit its data
    pub async fn autosize_columns(&self) -> Result<()> {
        self.batch(vec![requests::auto_resize_columns(self.sheet_id(), self.ncols())])
            .await
    }

    /// Align all cells in the tab
    pub async fn align_cells(
        &self,
        horizontal: HorizontalAlign,
        vertical: VerticalAlign,
    ) -> Result<()> {
        self.batch(vec![requests::align_cells(
            self.sheet_id(),
            self.nrows(),
            horizontal,
            vertical,
        )])
        .await
    }

    /// Set the font family and size for all cells in the tab
    pub async fn format_font(&self, font: &str, size: u32) -> Result<()> {
        self.batch(vec![requests::set_font(self.sheet_id(), font, size)])
            .await
    }

    /// Style and freeze the first `nrows` rows as headers
    pub async fn format_headers(&self, nrows: u32) -> Result<()> {
        self.batch(vec![
            requests::format_header_rows(self.sheet_id(), nrows),
            requests::freeze_rows(self.sheet_id(), nrows),
        ])
        .await
    }

    /// Apply the default stylings to the tab: header rows styled and frozen,
    /// default font everywhere, left/middle alignment, columns autosized,
    /// and the grid trimmed to its populated extent.
    pub async fn autoformat(&mut self, n_header_rows: u32) -> Result<()> {
        if n_header_rows > 0 {
            self.format_headers(n_header_rows).await?;
        }
        self.format_font(requests::DEFAULT_FONT, requests::DEFAULT_FONT_SIZE)
            .await?;
        self.align_cells(HorizontalAlign::default(), VerticalAlign::default())
            .await?;
        self.autosize_columns().await?;

        let svc = self.session.acquire().await?;
        let populated = svc
            .values_get(&self.spreadsheet_id, &tab_range(&self.name))
            .await?;
        let nrows = populated.values.len() as u32;
        let ncols = populated.values.iter().map(Vec::len).max().unwrap_or(0) as u32;
        if nrows > 0 && ncols > 0 {
            self.alter_dimensions(Some(nrows), Some(ncols)).await?;
        }
        Ok(())
    }

    async fn batch(&self, reqs: Vec<Json>) -> Result<()> {
        let svc = self.session.acquire().await?;
        svc.batch_update(&self.spreadsheet_id, requests::batch_update_body(reqs))
            .await?;
        Ok(())
    }
}

impl<T: SheetsTransport> fmt::Debug for Tab<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tab")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("name", &self.name)
            .field("sheet_id", &self.properties.sheet_id)
            .finish_non_exhaustive()
    }
}
