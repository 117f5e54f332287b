//! The storage seam.

use crate::statement::InsertStatement;
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a storage backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A uniqueness (or other integrity) constraint rejected the write.
    #[error("constraint violation on `{table}`: {message}")]
    Constraint { table: String, message: String },

    /// The connection could not be established or was lost.
    #[error("connection error: {0}")]
    Connection(String),

    /// Anything else the backend reported.
    #[error("storage error: {0}")]
    Other(String),
}

impl StorageError {
    pub fn is_constraint(&self) -> bool {
        matches!(self, StorageError::Constraint { .. })
    }
}

/// Executes bulk insert statements against a database.
///
/// Implementations hold one connection, acquired before the first call.
/// At most one statement is in flight at a time.
#[async_trait]
pub trait StatementExecutor: Send {
    /// Execute `statement` and return the number of rows actually written.
    ///
    /// Under [`InsertMode::SkipOnConflict`](crate::InsertMode) rows that
    /// collide with existing keys are not written and not counted. Under
    /// [`InsertMode::Normal`](crate::InsertMode) a collision fails the whole
    /// statement with [`StorageError::Constraint`] and writes nothing.
    async fn execute(&mut self, statement: &InsertStatement) -> Result<u64, StorageError>;

    /// Release the connection. Further calls to `execute` fail.
    async fn close(&mut self) -> Result<(), StorageError>;
}
