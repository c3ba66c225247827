//! Prelude module - common imports for sheetwire users
//!
//! ```rust
//! use sheetwire::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellValue,
    NumberFormatType,

    // Normalized data shapes
    Grid,
    Record,
    Table,
    TableData,

    // Request vocabulary
    Dimension,
    HorizontalAlign,
    ValueInputOption,
    VerticalAlign,

    // Error types
    Error,
    Result,

    // Client handles
    Session,
    SheetsTransport,
    Tab,
    Workbook,
};
