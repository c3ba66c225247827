//! Tabular ingest and egest: the bridge between normalized grids and the
//! three public interchange shapes.
//!
//! Downward (ingest), a [`Grid`] becomes a typed [`Table`], a sequence of
//! ordered records, or a raw `(headers, rows)` pair, all derived from the
//! same normalized intermediate so they always agree on content.
//!
//! Upward (egest), any of the accepted shapes (a table with optional
//! hierarchical column labels and row index, a sequence of uniform records,
//! or a plain row grid) flattens into a block of header rows plus a block of
//! value rows for upload. Header rows are plural to support multi-level
//! columns.

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::value::CellValue;
use indexmap::IndexMap;

/// An ordered mapping from header name to cell value; one per data row.
pub type Record = IndexMap<String, CellValue>;

/// Rough per-column type summary, inferred from the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// No non-empty values
    Empty,
    /// All non-empty values are numbers
    Number,
    /// All non-empty values are text
    Text,
    /// All non-empty values are booleans
    Bool,
    /// All non-empty values are dates
    Date,
    /// All non-empty values are times
    Time,
    /// All non-empty values are datetimes
    DateTime,
    /// More than one value type present
    Mixed,
}

/// A single column: one label per header level, one value per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    labels: Vec<CellValue>,
    values: Vec<CellValue>,
}

impl Column {
    /// Create a column with a single-level label
    pub fn new(label: impl Into<CellValue>, values: Vec<CellValue>) -> Self {
        Column {
            labels: vec![label.into()],
            values,
        }
    }

    /// Create a column with one label per header level (hierarchical columns)
    pub fn with_labels(labels: Vec<CellValue>, values: Vec<CellValue>) -> Self {
        Column { labels, values }
    }

    /// The column's labels, outermost level first
    pub fn labels(&self) -> &[CellValue] {
        &self.labels
    }

    /// The top-level label rendered as text
    pub fn name(&self) -> String {
        self.labels.first().map(CellValue::to_string).unwrap_or_default()
    }

    /// The column's values
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Infer the column's value type
    pub fn dtype(&self) -> ColumnType {
        let mut seen: Option<ColumnType> = None;
        for value in &self.values {
            let t = match value {
                CellValue::Empty => continue,
                CellValue::Number(_) => ColumnType::Number,
                CellValue::Text(_) => ColumnType::Text,
                CellValue::Bool(_) => ColumnType::Bool,
                CellValue::Date(_) => ColumnType::Date,
                CellValue::Time(_) => ColumnType::Time,
                CellValue::DateTime(_) => ColumnType::DateTime,
            };
            match seen {
                None => seen = Some(t),
                Some(prev) if prev == t => {}
                Some(_) => return ColumnType::Mixed,
            }
        }
        seen.unwrap_or(ColumnType::Empty)
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

/// A rectangular, column-major table with optional row-index columns and
/// optionally hierarchical column labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    index: Vec<Column>,
    columns: Vec<Column>,
}

impl Table {
    /// Create a table from data columns only
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        Self::with_index(Vec::new(), columns)
    }

    /// Create a table with leading row-index columns.
    ///
    /// All columns (index and data) must agree on row count, and all data
    /// columns must agree on label depth.
    pub fn with_index(index: Vec<Column>, columns: Vec<Column>) -> Result<Self> {
        let nrows = columns
            .first()
            .or_else(|| index.first())
            .map(Column::len)
            .unwrap_or(0);
        for col in index.iter().chain(&columns) {
            if col.len() != nrows {
                return Err(Error::RaggedTable(format!(
                    "column '{}' has {} rows, expected {}",
                    col.name(),
                    col.len(),
                    nrows
                )));
            }
        }
        let levels = columns.first().map(|c| c.labels.len()).unwrap_or(1);
        for col in &columns {
            if col.labels.len() != levels {
                return Err(Error::RaggedTable(format!(
                    "column '{}' has {} label levels, expected {}",
                    col.name(),
                    col.labels.len(),
                    levels
                )));
            }
        }
        Ok(Table { index, columns })
    }

    /// Number of data rows
    pub fn nrows(&self) -> usize {
        self.columns
            .first()
            .or_else(|| self.index.first())
            .map(Column::len)
            .unwrap_or(0)
    }

    /// Number of data columns (index columns excluded)
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Number of header levels
    pub fn levels(&self) -> usize {
        self.columns.first().map(|c| c.labels.len()).unwrap_or(1)
    }

    /// The data columns
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The row-index columns
    pub fn index(&self) -> &[Column] {
        &self.index
    }

    /// Look up a data column by its top-level label
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Names for the index columns: their own names when the first one is
    /// non-empty, otherwise synthesized `index0`, `index1`, ...
    fn index_names(&self) -> Vec<CellValue> {
        let named = self
            .index
            .first()
            .map(|c| !c.name().is_empty())
            .unwrap_or(false);
        self.index
            .iter()
            .enumerate()
            .map(|(i, col)| {
                if named {
                    col.labels.first().cloned().unwrap_or(CellValue::Empty)
                } else {
                    CellValue::Text(format!("index{i}"))
                }
            })
            .collect()
    }
}

/// Upload input, resolved once at the boundary into one of the three
/// accepted tabular shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum TableData {
    /// A plain row-major grid; uploaded as-is, with no header block
    Rows(Vec<Vec<CellValue>>),
    /// Uniform records; the first record's keys become the single header row
    Records(Vec<Record>),
    /// A [`Table`], with optional hierarchical labels and row index
    Table(Table),
}

/// Flatten upload input into `(header_rows, value_rows)`.
///
/// `include_index` only applies to the [`TableData::Table`] shape: when set,
/// index names (or synthesized `index0`, `index1`, ... if unnamed) lead every
/// header row and the index values lead every data row, one column per index
/// level.
pub fn split_blocks(
    data: &TableData,
    include_index: bool,
) -> Result<(Vec<Vec<CellValue>>, Vec<Vec<CellValue>>)> {
    match data {
        TableData::Rows(rows) => {
            if rows.is_empty() {
                return Err(Error::UnsupportedShape("empty sequence of rows".to_string()));
            }
            Ok((Vec::new(), rows.clone()))
        }
        TableData::Records(records) => split_records(records),
        TableData::Table(table) => Ok(split_table(table, include_index)),
    }
}

fn split_records(records: &[Record]) -> Result<(Vec<Vec<CellValue>>, Vec<Vec<CellValue>>)> {
    let Some(first) = records.first() else {
        return Err(Error::UnsupportedShape("empty sequence of records".to_string()));
    };
    let keys: Vec<&String> = first.keys().collect();
    let headers = vec![keys
        .iter()
        .map(|k| CellValue::Text((*k).clone()))
        .collect::<Vec<_>>()];

    let mut values = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        // Fetch by the first record's keys so every row aligns to the same
        // order, whatever order this record's keys happen to be in.
        let mut row_values = Vec::with_capacity(keys.len());
        for key in &keys {
            let value = record.get(*key).ok_or_else(|| Error::RecordKeyMissing {
                key: (*key).clone(),
                row,
            })?;
            row_values.push(value.clone());
        }
        values.push(row_values);
    }
    Ok((headers, values))
}

fn split_table(table: &Table, include_index: bool) -> (Vec<Vec<CellValue>>, Vec<Vec<CellValue>>) {
    let idx_names = if include_index {
        table.index_names()
    } else {
        Vec::new()
    };

    // One header row per label level, each produced by transposing the
    // per-column label tuples; index names repeat in every level's row.
    let mut headers = Vec::with_capacity(table.levels());
    for level in 0..table.levels() {
        let mut row = idx_names.clone();
        for col in table.columns() {
            row.push(col.labels()[level].clone());
        }
        headers.push(row);
    }

    let mut values = Vec::with_capacity(table.nrows());
    for r in 0..table.nrows() {
        let mut row = Vec::with_capacity(idx_names.len() + table.ncols());
        if include_index {
            for idx in table.index() {
                row.push(idx.values()[r].clone());
            }
        }
        for col in table.columns() {
            row.push(col.values()[r].clone());
        }
        values.push(row);
    }

    (headers, values)
}

impl Grid {
    /// Build a typed [`Table`] from this grid, one column per header entry.
    pub fn into_table(self) -> Table {
        let headers = self.headers().to_vec();
        let rows = self.rows();
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(j, label)| {
                let values = rows.iter().map(|row| row[j].clone()).collect();
                Column::new(label, values)
            })
            .collect();
        // Normalized rows are uniform, so the constructor cannot reject this.
        Table::new(columns).unwrap_or_default()
    }

    /// Build one ordered record per row, preserving header order.
    pub fn into_records(self) -> Vec<Record> {
        let names: Vec<String> = self.headers().iter().map(CellValue::to_string).collect();
        self.rows()
            .iter()
            .map(|row| names.iter().cloned().zip(row.iter().cloned()).collect())
            .collect()
    }

    /// The raw `(headers, rows)` pair.
    pub fn into_parts(self) -> (Vec<CellValue>, Vec<Vec<CellValue>>) {
        let headers = self.headers().to_vec();
        let rows = self.rows().to_vec();
        (headers, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn n(v: f64) -> CellValue {
        CellValue::Number(v)
    }

    fn t(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn sample_grid() -> Grid {
        Grid::from_rows(
            vec![
                vec![t("name"), t("age")],
                vec![t("bubbles"), n(3.0)],
                vec![t("dewey"), n(5.0)],
            ],
            true,
        )
        .unwrap()
    }

    #[test]
    fn test_ingest_shapes_agree() {
        let table = sample_grid().into_table();
        assert_eq!(table.ncols(), 2);
        assert_eq!(table.nrows(), 2);
        assert_eq!(table.column("age").unwrap().values(), &[n(3.0), n(5.0)]);
        assert_eq!(table.column("age").unwrap().dtype(), ColumnType::Number);
        assert_eq!(table.column("name").unwrap().dtype(), ColumnType::Text);

        let records = sample_grid().into_records();
        assert_eq!(records.len(), 2);
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, ["name", "age"]);
        assert_eq!(records[0]["name"], t("bubbles"));
        assert_eq!(records[1]["age"], n(5.0));

        let (headers, rows) = sample_grid().into_parts();
        assert_eq!(headers, vec![t("name"), t("age")]);
        assert_eq!(rows, vec![vec![t("bubbles"), n(3.0)], vec![t("dewey"), n(5.0)]]);
    }

    #[test]
    fn test_dtype_mixed() {
        let col = Column::new("x", vec![n(1.0), t("two"), CellValue::Empty]);
        assert_eq!(col.dtype(), ColumnType::Mixed);
        let col = Column::new("x", vec![CellValue::Empty]);
        assert_eq!(col.dtype(), ColumnType::Empty);
    }

    #[test]
    fn test_egest_rows_pass_through() {
        let rows = vec![vec![n(1.0), n(2.0)], vec![n(3.0), n(4.0)]];
        let (headers, values) = split_blocks(&TableData::Rows(rows.clone()), true).unwrap();
        assert_eq!(headers, Vec::<Vec<CellValue>>::new());
        assert_eq!(values, rows);
    }

    #[test]
    fn test_egest_empty_is_unsupported() {
        assert!(matches!(
            split_blocks(&TableData::Rows(vec![]), false),
            Err(Error::UnsupportedShape(_))
        ));
        assert!(matches!(
            split_blocks(&TableData::Records(vec![]), false),
            Err(Error::UnsupportedShape(_))
        ));
    }

    #[test]
    fn test_egest_records_align_to_first_keys() {
        let mut first = Record::new();
        first.insert("name".to_string(), t("bubbles"));
        first.insert("age".to_string(), n(3.0));
        // Second record inserts in the opposite order
        let mut second = Record::new();
        second.insert("age".to_string(), n(5.0));
        second.insert("name".to_string(), t("dewey"));

        let (headers, values) =
            split_blocks(&TableData::Records(vec![first, second]), false).unwrap();
        assert_eq!(headers, vec![vec![t("name"), t("age")]]);
        assert_eq!(values, vec![vec![t("bubbles"), n(3.0)], vec![t("dewey"), n(5.0)]]);
    }

    #[test]
    fn test_egest_records_missing_key() {
        let mut first = Record::new();
        first.insert("name".to_string(), t("bubbles"));
        let second = Record::new();

        let err = split_blocks(&TableData::Records(vec![first, second]), false).unwrap_err();
        assert_eq!(
            err,
            Error::RecordKeyMissing {
                key: "name".to_string(),
                row: 1
            }
        );
    }

    #[test]
    fn test_egest_table_single_level_with_index() {
        let table = Table::with_index(
            vec![Column::new(CellValue::Empty, vec![n(0.0), n(1.0)])],
            vec![
                Column::new("name", vec![t("bubbles"), t("dewey")]),
                Column::new("age", vec![n(3.0), n(5.0)]),
            ],
        )
        .unwrap();

        let (headers, values) = split_blocks(&TableData::Table(table), true).unwrap();
        // Unnamed index gets a synthesized name
        assert_eq!(headers, vec![vec![t("index0"), t("name"), t("age")]]);
        assert_eq!(
            values,
            vec![
                vec![n(0.0), t("bubbles"), n(3.0)],
                vec![n(1.0), t("dewey"), n(5.0)],
            ]
        );
    }

    #[test]
    fn test_egest_table_multi_level_headers() {
        let table = Table::with_index(
            vec![Column::new(CellValue::Empty, vec![n(0.0), n(1.0)])],
            vec![
                Column::with_labels(vec![t("pet"), t("name")], vec![t("bubbles"), t("dewey")]),
                Column::with_labels(vec![t("pet"), t("age")], vec![n(3.0), n(5.0)]),
            ],
        )
        .unwrap();

        let (headers, values) = split_blocks(&TableData::Table(table), true).unwrap();
        // Two column levels produce two header rows, each led by the index name
        assert_eq!(
            headers,
            vec![
                vec![t("index0"), t("pet"), t("pet")],
                vec![t("index0"), t("name"), t("age")],
            ]
        );
        assert_eq!(values[0], vec![n(0.0), t("bubbles"), n(3.0)]);
    }

    #[test]
    fn test_egest_table_named_index_without_index() {
        let table = Table::with_index(
            vec![Column::new("id", vec![n(7.0)])],
            vec![Column::new("name", vec![t("bubbles")])],
        )
        .unwrap();

        let (headers, values) =
            split_blocks(&TableData::Table(table.clone()), false).unwrap();
        assert_eq!(headers, vec![vec![t("name")]]);
        assert_eq!(values, vec![vec![t("bubbles")]]);

        let (headers, _) = split_blocks(&TableData::Table(table), true).unwrap();
        assert_eq!(headers, vec![vec![t("id"), t("name")]]);
    }

    #[test]
    fn test_ragged_table_rejected() {
        let err = Table::new(vec![
            Column::new("a", vec![n(1.0)]),
            Column::new("b", vec![n(1.0), n(2.0)]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::RaggedTable(_)));

        let err = Table::new(vec![
            Column::new("a", vec![n(1.0)]),
            Column::with_labels(vec![t("x"), t("y")], vec![n(1.0)]),
        ])
        .unwrap_err();
        assert!(matches!(err, Error::RaggedTable(_)));
    }
}
