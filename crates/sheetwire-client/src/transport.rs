//! The transport boundary: everything that actually goes over the network.
//!
//! Credential acquisition, refresh, HTTP, and retry policy all live behind
//! [`SheetsTransport`]; this crate only shapes requests and interprets
//! responses. Token freshness is an explicit precondition checked once per
//! logical action through [`Session::acquire`], never via hidden
//! interception.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value as Json;
use sheetwire_api::{Spreadsheet, ValueInputOption, ValueRange};

/// The calls the Sheets service exposes, as this library consumes them.
///
/// Implementations are expected to serialize conflicting concurrent writes
/// on the service side; each call here is a single atomic request with no
/// partial retry inside the client.
#[async_trait]
pub trait SheetsTransport: Send + Sync {
    /// Verify that the credentials behind this transport are still valid,
    /// refreshing them if necessary. Called once before each logical action.
    async fn ensure_valid(&self) -> Result<()> {
        Ok(())
    }

    /// `spreadsheets.get`, optionally filtered to one range and a field mask
    async fn get_spreadsheet(
        &self,
        spreadsheet_id: &str,
        ranges: Option<&str>,
        fields: Option<&str>,
        include_grid_data: bool,
    ) -> Result<Spreadsheet>;

    /// `spreadsheets.batchUpdate` with a prebuilt body
    async fn batch_update(&self, spreadsheet_id: &str, body: Json) -> Result<Json>;

    /// `spreadsheets.values.get` over a named range
    async fn values_get(&self, spreadsheet_id: &str, range: &str) -> Result<ValueRange>;

    /// `spreadsheets.values.update` over a named range
    async fn values_update(
        &self,
        spreadsheet_id: &str,
        range: &str,
        input: ValueInputOption,
        body: Json,
    ) -> Result<Json>;

    /// `spreadsheets.values.append` over a named range
    async fn values_append(
        &self,
        spreadsheet_id: &str,
        range: &str,
        input: ValueInputOption,
        body: Json,
    ) -> Result<Json>;

    /// `spreadsheets.values.clear` over a named range
    async fn values_clear(&self, spreadsheet_id: &str, range: &str) -> Result<()>;
}

/// A transport wrapper that gates every outbound action on token freshness.
pub struct Session<T> {
    transport: T,
}

impl<T: SheetsTransport> Session<T> {
    /// Wrap a transport
    pub fn new(transport: T) -> Self {
        Session { transport }
    }

    /// Check token freshness and hand out the transport for one logical
    /// action. Callers acquire once per user-facing operation, then issue
    /// however many calls that operation needs.
    pub async fn acquire(&self) -> Result<&T> {
        self.transport.ensure_valid().await?;
        Ok(&self.transport)
    }

    /// Direct access to the wrapped transport, without the freshness check
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Unwrap the session
    pub fn into_inner(self) -> T {
        self.transport
    }
}
