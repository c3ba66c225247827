//! # sheetwire-api
//!
//! The Google Sheets v4 wire layer for sheetwire: serde models of the
//! consumed response subset, extraction of decoded cell rows, A1 range
//! strings, and pure builders for `batchUpdate` request bodies.
//!
//! Nothing in this crate performs I/O; it shapes what goes over the wire and
//! interprets what comes back. The transport itself lives behind the
//! `sheetwire-client` boundary trait.

pub mod error;
pub mod range;
pub mod requests;
pub mod rows;
pub mod wire;

// Re-exports for convenience
pub use error::{Error, Result};
pub use range::{cell_range, tab_range, ValueInputOption};
pub use requests::{Dimension, HorizontalAlign, VerticalAlign};
pub use rows::extract_rows;
pub use wire::{
    CellData, ErrorValue, ExtendedValue, GridData, GridProperties, RowData, SheetData,
    SheetProperties, Spreadsheet, SpreadsheetProperties, ValueRange,
};
