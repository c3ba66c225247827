//! Row normalization: turning the ragged, sparsely populated rows the wire
//! delivers into a rectangle of uniform width.
//!
//! The wire omits trailing empty cells rather than sending explicit empties,
//! so rows arrive with differing lengths. Normalization drops the all-empty
//! tail of the sheet (embedded blank rows between populated rows are data and
//! survive), trims trailing empties per row, then pads or truncates every row
//! to one target width.

use crate::value::CellValue;

/// Index of the last row containing at least one non-empty value, or `None`
/// when nothing is populated. Blank rows sandwiched between populated rows
/// never count as the end of the data.
pub fn last_populated_row(rows: &[Vec<CellValue>]) -> Option<usize> {
    rows.iter()
        .rposition(|row| row.iter().any(|cell| !cell.is_empty()))
}

/// Strip trailing empty cells from a row. Interior empties are kept.
pub fn remove_trailing_empty(row: &mut Vec<CellValue>) {
    while row.last().is_some_and(|cell| cell.is_empty()) {
        row.pop();
    }
}

/// Resize a row to exactly `width` cells: truncate extras, or right-pad
/// with empties.
pub fn resize_row(mut row: Vec<CellValue>, width: usize) -> Vec<CellValue> {
    row.resize(width, CellValue::Empty);
    row
}

/// A normalized, rectangular block of sheet data: one header row plus data
/// rows of identical width.
///
/// This is a transient computation artifact per fetch; it is consumed by the
/// tabular conversions in [`crate::table`] and never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    headers: Vec<CellValue>,
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Normalize raw decoded rows into a rectangle.
    ///
    /// With `headers = true` the first retained row is consumed as the
    /// header row and sets the target width. Otherwise the target width is
    /// the widest retained row, and 0-based positional numeric headers are
    /// synthesized.
    ///
    /// Returns `None` when no row contains any value, the "no data" signal.
    pub fn from_rows(rows: Vec<Vec<CellValue>>, headers: bool) -> Option<Grid> {
        let last = last_populated_row(&rows)?;

        let mut rows: Vec<Vec<CellValue>> = rows.into_iter().take(last + 1).collect();
        for row in &mut rows {
            remove_trailing_empty(row);
        }

        let (header_row, width) = if headers {
            let header_row = rows.remove(0);
            let width = header_row.len();
            (header_row, width)
        } else {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            let header_row = (0..width).map(|i| CellValue::Number(i as f64)).collect();
            (header_row, width)
        };

        let rows = rows.into_iter().map(|row| resize_row(row, width)).collect();

        Some(Grid {
            headers: header_row,
            rows,
        })
    }

    /// The header row (synthesized positional labels when none was consumed)
    pub fn headers(&self) -> &[CellValue] {
        &self.headers
    }

    /// The normalized data rows
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Uniform width of the grid
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the grid holds no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
