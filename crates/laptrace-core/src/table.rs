//! Column-major tabular data
//!
//! Both endpoints answer with the same shape: a column name list plus
//! `{column: {"0": value, "1": value, ...}}` record objects for the
//! preview and the full data. `DataTable` owns that shape and the CSV
//! ingestion that feeds it.

use std::io::Read;

use serde_json::{Map, Value};

use crate::error::{TelemetryError, TelemetryResult};

/// In-memory table with named columns of JSON values
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    names: Vec<String>,
    columns: Vec<Vec<Value>>,
}

impl DataTable {
    /// Create a table, checking that names and columns line up
    pub fn new(names: Vec<String>, columns: Vec<Vec<Value>>) -> TelemetryResult<Self> {
        if names.len() != columns.len() {
            return Err(TelemetryError::InvalidTable(format!(
                "{} column names for {} columns",
                names.len(),
                columns.len()
            )));
        }
        if let Some(first) = columns.first() {
            if columns.iter().any(|c| c.len() != first.len()) {
                return Err(TelemetryError::InvalidTable(
                    "columns have differing lengths".to_string(),
                ));
            }
        }
        Ok(Self { names, columns })
    }

    /// Construct from parts known to line up (dataset conversion)
    pub(crate) fn from_parts(names: Vec<String>, columns: Vec<Vec<Value>>) -> Self {
        Self { names, columns }
    }

    /// Parse CSV input into a table.
    ///
    /// The first record is the header row. Cell types are inferred per
    /// column: integer if every non-empty cell parses as i64, else float
    /// if every non-empty cell parses as f64, else string. Empty cells
    /// become JSON null.
    pub fn from_csv<R: Read>(reader: R) -> TelemetryResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);

        let names: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); names.len()];
        for record in csv_reader.records() {
            let record = record?;
            for (i, cell) in record.iter().enumerate() {
                raw_columns[i].push(cell.to_string());
            }
        }

        let columns = raw_columns.into_iter().map(coerce_column).collect();

        tracing::debug!(
            columns = names.len(),
            "CSV parsed into table"
        );

        Self::new(names, columns)
    }

    /// Column names in table order
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn num_columns(&self) -> usize {
        self.names.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Values of a column by name
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.columns[i].as_slice())
    }

    /// Render the `{column: {"0": v0, "1": v1, ...}}` record object,
    /// optionally truncated to the first `limit` rows.
    pub fn column_records(&self, limit: Option<usize>) -> Value {
        let rows = limit.map_or(self.num_rows(), |l| l.min(self.num_rows()));

        let mut out = Map::new();
        for (name, column) in self.names.iter().zip(&self.columns) {
            let mut records = Map::new();
            for (i, value) in column.iter().take(rows).enumerate() {
                records.insert(i.to_string(), value.clone());
            }
            out.insert(name.clone(), Value::Object(records));
        }
        Value::Object(out)
    }
}

#[derive(Clone, Copy, PartialEq)]
enum ColumnType {
    Int,
    Float,
    Text,
}

/// Infer the narrowest type that fits every non-empty cell, then coerce
fn coerce_column(cells: Vec<String>) -> Vec<Value> {
    let mut kind = ColumnType::Int;
    for cell in cells.iter().filter(|c| !c.is_empty()) {
        if kind == ColumnType::Int && cell.parse::<i64>().is_err() {
            kind = ColumnType::Float;
        }
        if kind == ColumnType::Float && cell.parse::<f64>().is_err() {
            kind = ColumnType::Text;
            break;
        }
    }

    cells
        .into_iter()
        .map(|cell| {
            if cell.is_empty() {
                return Value::Null;
            }
            match kind {
                // parses are infallible here, the scan above proved them
                ColumnType::Int => Value::from(cell.parse::<i64>().unwrap_or_default()),
                ColumnType::Float => Value::from(cell.parse::<f64>().unwrap_or_default()),
                ColumnType::Text => Value::from(cell),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE_CSV: &str = "\
time,speed,gear,note
0.0,201.5,3,clean
0.1,205.0,4,
0.2,198.25,4,lift";

    #[test]
    fn test_from_csv_infers_column_types() {
        let table = DataTable::from_csv(SAMPLE_CSV.as_bytes()).unwrap();

        assert_eq!(table.column_names(), &["time", "speed", "gear", "note"]);
        assert_eq!(table.num_rows(), 3);

        let gear = table.column("gear").unwrap();
        assert_eq!(gear, &[json!(3), json!(4), json!(4)]);

        let speed = table.column("speed").unwrap();
        assert_eq!(speed[0], json!(201.5));

        let note = table.column("note").unwrap();
        assert_eq!(note[0], json!("clean"));
        assert_eq!(note[1], Value::Null);
    }

    #[test]
    fn test_from_csv_mixed_numeric_column_degrades_to_float() {
        let csv = "a\n1\n2.5\n3";
        let table = DataTable::from_csv(csv.as_bytes()).unwrap();
        let a = table.column("a").unwrap();
        assert_eq!(a, &[json!(1.0), json!(2.5), json!(3.0)]);
    }

    #[test]
    fn test_from_csv_rejects_ragged_rows() {
        let csv = "a,b\n1,2\n3";
        let err = DataTable::from_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, TelemetryError::Csv(_)));
    }

    #[test]
    fn test_column_records_shape_and_limit() {
        let table = DataTable::from_csv(SAMPLE_CSV.as_bytes()).unwrap();

        let full = table.column_records(None);
        assert_eq!(full["speed"]["0"], json!(201.5));
        assert_eq!(full["speed"]["2"], json!(198.25));

        let head = table.column_records(Some(2));
        assert_eq!(head["speed"].as_object().unwrap().len(), 2);
        assert!(head["speed"].get("2").is_none());

        // limit past the end is not an error
        let over = table.column_records(Some(100));
        assert_eq!(over["speed"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_new_rejects_mismatched_columns() {
        let err = DataTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![json!(1)]],
        )
        .unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidTable(_)));

        let err = DataTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![json!(1)], vec![json!(1), json!(2)]],
        )
        .unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidTable(_)));
    }

    #[test]
    fn test_empty_input() {
        let table = DataTable::from_csv("".as_bytes()).unwrap();
        assert_eq!(table.num_columns(), 0);
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.column_records(None), json!({}));
    }
}
