//! Bulk insert statements derived from record batches.

use crate::mode::InsertMode;
use seed_core::{Record, SeedValue};
use thiserror::Error;

/// Upper bound on bound parameters in a single statement (MySQL protocol
/// limit on prepared statement placeholders).
pub const MAX_PARAMETERS: usize = 65_535;

/// Reasons a batch cannot become a statement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatementError {
    #[error("no rows to insert into `{table}`")]
    Empty { table: &'static str },

    #[error("`{table}` row has {actual} values for {expected} columns")]
    ColumnMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("`{table}` batch needs {count} parameters, limit is {max}")]
    TooManyParameters {
        table: &'static str,
        count: usize,
        max: usize,
    },
}

/// A single multi-row insert.
///
/// Parameters are flat and row-major: the value for row `i`, column `j`
/// sits at `params[i * columns.len() + j]`. Backends render the SQL text
/// from the table, columns, row count and mode.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    table: &'static str,
    columns: &'static [&'static str],
    row_count: usize,
    params: Vec<SeedValue>,
    mode: InsertMode,
}

impl InsertStatement {
    /// Build the statement for `rows`.
    pub fn build<R: Record>(rows: &[R], mode: InsertMode) -> Result<Self, StatementError> {
        if rows.is_empty() {
            return Err(StatementError::Empty { table: R::TABLE });
        }

        let count = rows.len() * R::COLUMNS.len();
        if count > MAX_PARAMETERS {
            return Err(StatementError::TooManyParameters {
                table: R::TABLE,
                count,
                max: MAX_PARAMETERS,
            });
        }

        let mut params = Vec::with_capacity(count);
        for row in rows {
            let values = row.values();
            if values.len() != R::COLUMNS.len() {
                return Err(StatementError::ColumnMismatch {
                    table: R::TABLE,
                    expected: R::COLUMNS.len(),
                    actual: values.len(),
                });
            }
            params.extend(values);
        }

        Ok(Self {
            table: R::TABLE,
            columns: R::COLUMNS,
            row_count: rows.len(),
            params,
            mode,
        })
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn mode(&self) -> InsertMode {
        self.mode
    }

    pub fn params(&self) -> &[SeedValue] {
        &self.params
    }

    pub fn into_params(self) -> Vec<SeedValue> {
        self.params
    }

    /// Parameters grouped per row.
    pub fn rows(&self) -> impl Iterator<Item = &[SeedValue]> {
        self.params.chunks(self.columns.len())
    }
}
