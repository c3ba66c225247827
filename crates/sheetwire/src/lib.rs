//! # sheetwire
//!
//! A Rust client library for reading, writing, and formatting Google Sheets
//! data.
//!
//! Sheetwire converts between the Sheets API's JSON wire shapes and typed
//! tabular data: cells decode to [`CellValue`]s using their display format,
//! raw grids normalize into uniform [`Grid`]s, and uploads encode back to
//! the API's `values` payloads. The [`Workbook`] and [`Tab`] handles tie it
//! together over a pluggable [`SheetsTransport`].
//!
//! ## Features
//!
//! - Format-aware cell decoding (dates, times, numbers, booleans)
//! - Row normalization with header extraction
//! - Three tabular shapes: raw rows, ordered records, typed tables
//! - A1 cell and column-letter addressing
//! - Batch request builders for styling, sizing, and tab lifecycle
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sheetwire::prelude::*;
//!
//! # async fn example<T: SheetsTransport>(transport: T) -> sheetwire::Result<()> {
//! let session = Arc::new(Session::new(transport));
//! let workbook = Workbook::open(session, "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms").await?;
//!
//! let tab = workbook.fetch_tab("expenses").await?;
//! let table = tab.fetch_table(true).await?;
//! println!("{} rows x {} cols", table.nrows(), table.ncols());
//! # Ok(())
//! # }
//! ```

pub mod prelude;

// Re-export core types
pub use sheetwire_core::{
    cell_label,
    column_letters,
    decode_cell,
    letters_to_column,
    // Cell types
    CellValue,
    Column,
    ColumnType,
    // Normalized data shapes
    Grid,
    NumberFormatType,
    Record,
    Table,
    TableData,
    WireValue,
};

// Re-export API types
pub use sheetwire_api::{
    cell_range, extract_rows, requests, tab_range, Dimension, HorizontalAlign, Spreadsheet,
    ValueInputOption, ValueRange, VerticalAlign,
};

// Re-export client types
pub use sheetwire_client::{Error, Result, Session, SheetsTransport, Tab, Workbook};
