//! Serde model of the consumed subset of the Sheets v4 JSON schema.
//!
//! Only the fields this library reads are modeled; unknown fields are
//! ignored so that API additions never break deserialization. Field names
//! are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use sheetwire_core::{NumberFormatType, WireValue};

/// Top-level `spreadsheets.get` response (fields-filtered).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    /// Spreadsheet-level properties, when requested
    #[serde(default)]
    pub properties: Option<SpreadsheetProperties>,
    /// One entry per sheet (tab) covered by the request
    #[serde(default)]
    pub sheets: Vec<SheetData>,
}

/// Spreadsheet-level properties.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetProperties {
    /// The document title
    #[serde(default)]
    pub title: String,
}

/// One sheet (tab) of a spreadsheet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetData {
    /// The sheet's properties, when requested
    #[serde(default)]
    pub properties: Option<SheetProperties>,
    /// Cell grids, one per requested range
    #[serde(default)]
    pub data: Vec<GridData>,
}

/// Sheet properties (`sheets/properties`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    /// Numeric sheet identifier, stable across renames
    #[serde(default)]
    pub sheet_id: i64,
    /// The tab's display name
    #[serde(default)]
    pub title: String,
    /// Grid dimensions
    #[serde(default)]
    pub grid_properties: GridProperties,
}

/// Grid dimensions of a sheet.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    /// Declared row count
    #[serde(default)]
    pub row_count: u32,
    /// Declared column count
    #[serde(default)]
    pub column_count: u32,
    /// Rows frozen at the top of the sheet
    #[serde(default)]
    pub frozen_row_count: u32,
}

/// A block of cell rows for one range.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridData {
    /// One entry per row; trailing empty rows are omitted by the service
    #[serde(default)]
    pub row_data: Vec<RowData>,
}

/// One row of cells.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowData {
    /// One entry per populated cell; trailing empties are omitted
    #[serde(default)]
    pub values: Vec<CellData>,
}

/// One cell: its effective value plus the display-format tag.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellData {
    /// The calculated cell value, absent for empty cells
    #[serde(default)]
    pub effective_value: Option<ExtendedValue>,
    /// The calculated cell format
    #[serde(default)]
    pub effective_format: Option<CellFormat>,
}

impl CellData {
    /// The display format type, when one is set on the cell
    pub fn number_format_type(&self) -> Option<NumberFormatType> {
        self.effective_format
            .as_ref()
            .and_then(|f| f.number_format.as_ref())
            .map(|nf| nf.format_type)
    }
}

/// The format half of a cell (`effectiveFormat`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellFormat {
    /// Number format, absent for automatically formatted cells
    #[serde(default)]
    pub number_format: Option<NumberFormat>,
}

/// A number format descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    /// The format's type tag
    #[serde(rename = "type")]
    pub format_type: NumberFormatType,
}

/// A cell's `effectiveValue`: on the wire this is a one-entry mapping keyed
/// by the coarse kind, modeled here as a struct of options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedValue {
    /// `numberValue`
    #[serde(default)]
    pub number_value: Option<f64>,
    /// `stringValue`
    #[serde(default)]
    pub string_value: Option<String>,
    /// `boolValue`
    #[serde(default)]
    pub bool_value: Option<bool>,
    /// `errorValue`: the cell's formula produced an error
    #[serde(default)]
    pub error_value: Option<ErrorValue>,
}

impl ExtendedValue {
    /// The coarse-kind tagged value, if the cell carries one
    pub fn wire_value(&self) -> Option<WireValue> {
        if let Some(n) = self.number_value {
            Some(WireValue::Number(n))
        } else if let Some(s) = &self.string_value {
            Some(WireValue::Text(s.clone()))
        } else {
            self.bool_value.map(WireValue::Bool)
        }
    }
}

/// An error inside a cell (e.g. a division by zero).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorValue {
    /// The error type (e.g. `DIVIDE_BY_ZERO`)
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// A human-readable message
    #[serde(default)]
    pub message: Option<String>,
}

/// A `spreadsheets.values` range of data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// The A1 range the values cover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Row-major cell values as JSON primitives
    #[serde(default)]
    pub values: Vec<Vec<Json>>,
}
