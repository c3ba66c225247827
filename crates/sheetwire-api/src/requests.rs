//! Builders for `spreadsheets.batchUpdate` request objects and values upload
//! bodies.
//!
//! Every builder is a total, stateless function of its explicit inputs:
//! same arguments, same request body, and applying the same formatting
//! request twice yields the same sheet state. The only literals baked in are
//! the documented styling defaults below.

use serde_json::{json, Value as Json};
use sheetwire_core::CellValue;

/// Default font family applied by the formatting helpers
pub const DEFAULT_FONT: &str = "Proxima Nova";
/// Default font size applied by the formatting helpers
pub const DEFAULT_FONT_SIZE: u32 = 10;
/// Header background: dark gray
pub const HEADER_BACKGROUND: f64 = 0.262_745_11;
/// Header text: off-white
pub const HEADER_FOREGROUND: f64 = 0.952_941_18;
/// Row count the service gives new sheets
pub const DEFAULT_TAB_ROWS: u32 = 1000;
/// Column count the service gives new sheets
pub const DEFAULT_TAB_COLS: u32 = 26;

/// A sheet dimension selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Rows
    Rows,
    /// Columns
    Columns,
}

impl Dimension {
    /// The wire spelling of the dimension
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Rows => "ROWS",
            Dimension::Columns => "COLUMNS",
        }
    }
}

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    /// Left-aligned (the formatting default)
    #[default]
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
}

impl HorizontalAlign {
    /// The wire spelling of the alignment
    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAlign::Left => "LEFT",
            HorizontalAlign::Center => "CENTER",
            HorizontalAlign::Right => "RIGHT",
        }
    }
}

/// Vertical cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    /// Top of the cell
    Top,
    /// Middle of the cell (the formatting default)
    #[default]
    Middle,
    /// Bottom of the cell
    Bottom,
}

impl VerticalAlign {
    /// The wire spelling of the alignment
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlign::Top => "TOP",
            VerticalAlign::Middle => "MIDDLE",
            VerticalAlign::Bottom => "BOTTOM",
        }
    }
}

/// `appendDimension`: grow a sheet by `length` rows or columns.
pub fn append_dimension(sheet_id: i64, dimension: Dimension, length: u32) -> Json {
    json!({
        "appendDimension": {
            "sheetId": sheet_id,
            "dimension": dimension.as_str(),
            "length": length,
        }
    })
}

/// `updateSheetProperties`: set a sheet's exact row and column counts.
/// Shrinking below the populated extent discards the data outside it.
pub fn update_grid_size(sheet_id: i64, nrows: u32, ncols: u32) -> Json {
    json!({
        "updateSheetProperties": {
            "properties": {
                "sheetId": sheet_id,
                "gridProperties": {
                    "rowCount": nrows,
                    "columnCount": ncols,
                }
            },
            "fields": "gridProperties(columnCount, rowCount)",
        }
    })
}

/// `autoResizeDimensions`: fit the first `ncols` column widths to their data.
pub fn auto_resize_columns(sheet_id: i64, ncols: u32) -> Json {
    json!({
        "autoResizeDimensions": {
            "dimensions": {
                "sheetId": sheet_id,
                "dimension": "COLUMNS",
                "startIndex": 0,
                "endIndex": ncols,
            }
        }
    })
}

/// `repeatCell`: align every cell in the first `nrows` rows.
pub fn align_cells(
    sheet_id: i64,
    nrows: u32,
    horizontal: HorizontalAlign,
    vertical: VerticalAlign,
) -> Json {
    json!({
        "repeatCell": {
            "range": {
                "sheetId": sheet_id,
                "startRowIndex": 0,
                "endRowIndex": nrows,
            },
            "cell": {
                "userEnteredFormat": {
                    "horizontalAlignment": horizontal.as_str(),
                    "verticalAlignment": vertical.as_str(),
                }
            },
            "fields": "userEnteredFormat(horizontalAlignment,verticalAlignment)",
        }
    })
}

/// `repeatCell`: set the font family and size for every cell in the sheet.
pub fn set_font(sheet_id: i64, font: &str, size: u32) -> Json {
    json!({
        "repeatCell": {
            "range": {"sheetId": sheet_id},
            "cell": {
                "userEnteredFormat": {
                    "textFormat": {
                        "fontSize": size,
                        "fontFamily": font,
                    }
                }
            },
            "fields": "userEnteredFormat(textFormat(fontSize,fontFamily))",
        }
    })
}

/// `repeatCell`: style the first `nrows` rows as headers, with a dark gray
/// background, off-white text, left alignment, and the default font.
pub fn format_header_rows(sheet_id: i64, nrows: u32) -> Json {
    json!({
        "repeatCell": {
            "range": {
                "sheetId": sheet_id,
                "startRowIndex": 0,
                "endRowIndex": nrows,
            },
            "cell": {
                "userEnteredFormat": {
                    "backgroundColor": {
                        "red": HEADER_BACKGROUND,
                        "green": HEADER_BACKGROUND,
                        "blue": HEADER_BACKGROUND,
                    },
                    "horizontalAlignment": "LEFT",
                    "textFormat": {
                        "foregroundColor": {
                            "red": HEADER_FOREGROUND,
                            "green": HEADER_FOREGROUND,
                            "blue": HEADER_FOREGROUND,
                        },
                        "fontSize": DEFAULT_FONT_SIZE,
                        "fontFamily": DEFAULT_FONT,
                        "bold": false,
                    }
                }
            },
            "fields": "userEnteredFormat(backgroundColor,textFormat,horizontalAlignment)",
        }
    })
}

/// `updateSheetProperties`: keep the first `nrows` rows visible when the
/// user scrolls.
pub fn freeze_rows(sheet_id: i64, nrows: u32) -> Json {
    json!({
        "updateSheetProperties": {
            "properties": {
                "sheetId": sheet_id,
                "gridProperties": {
                    "frozenRowCount": nrows,
                }
            },
            "fields": "gridProperties(frozenRowCount)",
        }
    })
}

/// `addSheet`: create a tab with the given title and grid size.
pub fn add_sheet(title: &str, nrows: u32, ncols: u32) -> Json {
    json!({
        "addSheet": {
            "properties": {
                "title": title,
                "gridProperties": {
                    "rowCount": nrows,
                    "columnCount": ncols,
                }
            }
        }
    })
}

/// `deleteSheet`: remove a tab by its numeric id.
pub fn delete_sheet(sheet_id: i64) -> Json {
    json!({"deleteSheet": {"sheetId": sheet_id}})
}

/// Wrap request objects into one transactional `batchUpdate` body.
pub fn batch_update_body(requests: Vec<Json>) -> Json {
    json!({"requests": requests})
}

/// Build a `values` upload body from decoded rows, encoding every cell to a
/// JSON primitive on the way (the values API rejects anything else).
pub fn values_body(rows: &[Vec<CellValue>]) -> Json {
    let values: Vec<Vec<Json>> = rows
        .iter()
        .map(|row| row.iter().map(CellValue::to_wire).collect())
        .collect();
    json!({"values": values})
}
