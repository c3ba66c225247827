//! # sheetwire-core
//!
//! The marshaling core of sheetwire: bidirectional conversion between the
//! Google Sheets API's loosely-typed, sparse JSON cell representation and
//! clean rectangular tabular structures.
//!
//! This crate is purely computational, with no I/O and no shared state. It
//! provides:
//! - [`CellValue`] and the wire cell codec ([`decode_cell`], serial-day
//!   temporal encoding, JSON-safe [`CellValue::to_wire`])
//! - the column-letter / A1-label codec ([`label`])
//! - ragged-row normalization into a uniform [`Grid`]
//! - tabular ingest/egest between grids and the three interchange shapes
//!   ([`Table`], ordered [`Record`]s, raw header+rows)
//!
//! ## Example
//!
//! ```rust
//! use sheetwire_core::{decode_cell, CellValue, Grid, NumberFormatType, WireValue};
//!
//! // Decode a DATE-formatted serial number off the wire
//! let cell = decode_cell(
//!     Some(&WireValue::Number(42370.0)),
//!     Some(NumberFormatType::Date),
//! ).unwrap();
//! assert_eq!(cell.to_string(), "2016-01-01");
//!
//! // Normalize ragged rows into a rectangle with a header row
//! let grid = Grid::from_rows(vec![
//!     vec![CellValue::from("name"), CellValue::from("age")],
//!     vec![CellValue::from("bubbles")],
//! ], true).unwrap();
//! assert_eq!(grid.width(), 2);
//! ```

pub mod error;
pub mod grid;
pub mod label;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use error::{Error, Result};
pub use grid::{last_populated_row, remove_trailing_empty, resize_row, Grid};
pub use label::{cell_label, column_letters, letters_to_column, parse_cell_label};
pub use table::{split_blocks, Column, ColumnType, Record, Table, TableData};
pub use value::{
    date_from_serial, datetime_from_serial, decode_cell, serial_epoch, time_from_serial,
    CellValue, NumberFormatType, WireValue,
};
