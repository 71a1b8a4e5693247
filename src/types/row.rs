use crate::error::{Error, Result};
use crate::types::SqlValue;

/// A single materialized result tuple, addressed by column name.
///
/// Column order is preserved as reported by the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRow {
    columns: Vec<(String, SqlValue)>,
}

impl NamedRow {
    pub fn from_pairs<N, I>(pairs: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, SqlValue)>,
    {
        Self {
            columns: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }

    /// Gets a value by column name.
    pub fn get(&self, column: &str) -> Result<&SqlValue> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))
    }

    /// Returns all column names, in result order.
    pub fn columns(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_get_by_name() {
        let row = NamedRow::from_pairs([
            ("id", SqlValue::Int64(1)),
            ("name", SqlValue::Text("John".into())),
        ]);

        assert_eq!(row.get("id").unwrap().as_i64(), Some(1));
        assert_eq!(row.get("name").unwrap().as_str(), Some("John"));
    }

    #[test]
    fn test_get_missing_column() {
        let row = NamedRow::from_pairs([("id", SqlValue::Int64(1))]);

        let err = row.get("missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ColumnNotFound);
        assert_eq!(err.to_string(), "column not found: missing");
    }

    #[test]
    fn test_column_order_preserved() {
        let row = NamedRow::from_pairs([
            ("b", SqlValue::Null),
            ("a", SqlValue::Null),
            ("c", SqlValue::Null),
        ]);

        assert_eq!(row.columns(), vec!["b", "a", "c"]);
        assert_eq!(row.len(), 3);
        assert!(!row.is_empty());
    }
}
