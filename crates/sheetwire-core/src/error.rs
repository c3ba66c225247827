//! Error types for sheetwire-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetwire-core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Row or column index outside the 1-based sheet coordinate space
    #[error("Invalid cell index: row and column values must be >= 1 (got row {row}, col {col})")]
    InvalidIndex {
        /// 1-based row index as given
        row: i64,
        /// 1-based column index as given
        col: i64,
    },

    /// Column index outside the 1-based sheet coordinate space
    #[error("Invalid column index: column values must be >= 1 (got {col})")]
    InvalidColumn {
        /// 1-based column index as given
        col: i64,
    },

    /// A cell label could not be parsed as column letters + row number
    #[error("Invalid cell label: {0}")]
    InvalidLabel(String),

    /// A cell's declared number format cannot operate on its value's type.
    ///
    /// This is the fatal half of the decode error policy: the value's runtime
    /// type is structurally incompatible with the conversion the format
    /// selects (e.g. a boolean under a DATE format). Fix the cell format in
    /// the sheet, or set it to Automatic.
    #[error(
        "Mismatch exists in expected and actual data types for cell with value '{value}'. \
         Cell format is '{format}' but cell value type is '{actual}'. To correct this, in \
         Google Sheets set the appropriate cell format or set it to Automatic."
    )]
    FormatMismatch {
        /// Offending value, rendered for display
        value: String,
        /// The wire name of the selected format
        format: String,
        /// Type name of the value actually present
        actual: &'static str,
    },

    /// Upload input was not one of the accepted tabular shapes
    #[error(
        "Unsupported input shape: {0}. Input data must be a table, a non-empty sequence \
         of records, or a non-empty sequence of rows."
    )]
    UnsupportedShape(String),

    /// A record row is missing a key present in the first record
    #[error("Record at row {row} is missing key '{key}' present in the first record")]
    RecordKeyMissing {
        /// The missing key
        key: String,
        /// 0-based record position
        row: usize,
    },

    /// The wire data reports a formula/reference error inside a cell
    #[error(
        "Error of type \"{error_type}\" within cell {label} prevents fetching data. \
         Message: \"{message}\""
    )]
    CellError {
        /// A1-style coordinate of the offending cell
        label: String,
        /// Error type reported by the service (e.g. DIVIDE_BY_ZERO)
        error_type: String,
        /// Error message reported by the service
        message: String,
    },

    /// Columns given to a table constructor do not form a rectangle
    #[error("Ragged table: {0}")]
    RaggedTable(String),
}
