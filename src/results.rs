use std::collections::HashMap;

use crate::types::SqlValue;

/// Rows returned for one statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRows {
    columns: Vec<String>,
    rows: Vec<Vec<SqlValue>>,
    // Position of each name in `columns`.
    column_index: HashMap<String, usize>,
}

impl ResultRows {
    /// Create a result from column names and row values
    ///
    /// # Arguments
    ///
    /// * `columns` - The column names
    /// * `rows` - The values of each row
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<SqlValue>>) -> Self {
        let column_index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            columns,
            rows,
            column_index,
        }
    }

    /// Column names, in the order values appear in each row
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row values, each in column order
    #[must_use]
    pub fn rows(&self) -> &[Vec<SqlValue>] {
        &self.rows
    }

    #[must_use]
    pub fn get_column_index(&self, column_name: &str) -> Option<usize> {
        self.column_index.get(column_name).copied()
    }

    /// Get a value by row index and column name
    #[must_use]
    pub fn get(&self, row: usize, column_name: &str) -> Option<&SqlValue> {
        let idx = self.get_column_index(column_name)?;
        self.rows.get(row)?.get(idx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Outcome of one statement as reported by the remote service.
///
/// A statement either produced `results`, failed with an `error` message, or (for a
/// misbehaving service) neither.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementResult {
    pub results: Option<ResultRows>,
    pub error: Option<String>,
}

impl StatementResult {
    #[must_use]
    pub fn rows(results: ResultRows) -> Self {
        Self {
            results: Some(results),
            error: None,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            results: None,
            error: Some(message.into()),
        }
    }

    #[must_use]
    pub fn has_result(&self) -> bool {
        self.results.is_some()
    }
}
