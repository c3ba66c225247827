//! Extraction of decoded cell rows from a grid-data response.

use crate::error::{Error, Result};
use crate::wire::Spreadsheet;
use sheetwire_core::{cell_label, decode_cell, CellValue};

/// Walk the first sheet's first grid and decode every cell.
///
/// Returns one (still ragged) row of [`CellValue`]s per wire row, ready for
/// normalization. A cell whose formula produced an error is fatal: the
/// returned [`sheetwire_core::Error::CellError`] names the A1 coordinate,
/// the error type, and the service's message.
pub fn extract_rows(spreadsheet: &Spreadsheet) -> Result<Vec<Vec<CellValue>>> {
    let grid = spreadsheet
        .sheets
        .first()
        .and_then(|sheet| sheet.data.first())
        .ok_or(Error::MissingGridData)?;

    let mut rows = Vec::with_capacity(grid.row_data.len());
    for (row_num, row) in grid.row_data.iter().enumerate() {
        let mut row_values = Vec::with_capacity(row.values.len());
        for (col_num, cell) in row.values.iter().enumerate() {
            let wire_value = match &cell.effective_value {
                Some(ev) => {
                    if let Some(error) = &ev.error_value {
                        return Err(sheetwire_core::Error::CellError {
                            label: cell_label(row_num as u32 + 1, col_num as u32 + 1)?,
                            error_type: error
                                .error_type
                                .clone()
                                .unwrap_or_else(|| "unknown type".to_string()),
                            message: error
                                .message
                                .clone()
                                .unwrap_or_else(|| "unknown error message".to_string()),
                        }
                        .into());
                    }
                    ev.wire_value()
                }
                None => None,
            };
            row_values.push(decode_cell(wire_value.as_ref(), cell.number_format_type())?);
        }
        rows.push(row_values);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use sheetwire_core::Error as CoreError;

    fn spreadsheet(body: serde_json::Value) -> Spreadsheet {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_extract_mixed_rows() {
        let raw = spreadsheet(serde_json::json!({
            "sheets": [{"data": [{"rowData": [
                {"values": [
                    {"effectiveValue": {"stringValue": "label"}},
                    {"effectiveValue": {"numberValue": 42370.0},
                     "effectiveFormat": {"numberFormat": {"type": "DATE"}}},
                    {"effectiveValue": {"boolValue": true}}
                ]},
                {"values": [{}, {"effectiveValue": {"numberValue": 1.5}}]}
            ]}]}]
        }));
        let rows = extract_rows(&raw).unwrap();
        assert_eq!(
            rows,
            vec![
                vec![
                    CellValue::Text("label".to_string()),
                    CellValue::Date(NaiveDate::from_ymd_opt(2016, 1, 1).unwrap()),
                    CellValue::Bool(true),
                ],
                vec![CellValue::Empty, CellValue::Number(1.5)],
            ]
        );
    }

    #[test]
    fn test_cell_error_is_fatal_with_coordinates() {
        let raw = spreadsheet(serde_json::json!({
            "sheets": [{"data": [{"rowData": [
                {"values": [
                    {"effectiveValue": {"numberValue": 1.0}},
                    {"effectiveValue": {"errorValue": {
                        "type": "DIVIDE_BY_ZERO",
                        "message": "Function DIVIDE parameter 2 cannot be zero."
                    }}}
                ]}
            ]}]}]
        }));
        match extract_rows(&raw).unwrap_err() {
            Error::Core(CoreError::CellError { label, error_type, .. }) => {
                assert_eq!(label, "B1");
                assert_eq!(error_type, "DIVIDE_BY_ZERO");
            }
            other => panic!("expected CellError, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_grid_data() {
        let raw = spreadsheet(serde_json::json!({"sheets": []}));
        assert!(matches!(extract_rows(&raw), Err(Error::MissingGridData)));
    }

    #[test]
    fn test_empty_grid_yields_empty_rows() {
        let raw = spreadsheet(serde_json::json!({"sheets": [{"data": [{}]}]}));
        assert_eq!(extract_rows(&raw).unwrap(), Vec::<Vec<CellValue>>::new());
    }
}
