//! Error types for population runs.

use crate::executor::StorageError;
use crate::statement::StatementError;
use seed_core::EntityKind;
use thiserror::Error;

/// Errors that can abort a population run.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Storage rejected a statement or the connection failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A batch could not be turned into a statement.
    #[error(transparent)]
    Statement(#[from] StatementError),

    /// A stage has rows to build but the entity it references has none.
    #[error("cannot build {entity}: no {referenced} to reference")]
    MissingReference {
        entity: EntityKind,
        referenced: EntityKind,
    },

    /// A stage was started before one of its dependencies finished.
    #[error("cannot build {entity} before {dependency} are finished")]
    StageOrder {
        entity: EntityKind,
        dependency: EntityKind,
    },

    /// Failure while loading a specific batch.
    #[error("{entity} batch {batch} failed: {source}")]
    Batch {
        entity: EntityKind,
        batch: u64,
        #[source]
        source: Box<PopulateError>,
    },
}

impl PopulateError {
    /// Attach the entity and batch number the error occurred in.
    pub fn in_batch(self, entity: EntityKind, batch: u64) -> Self {
        PopulateError::Batch {
            entity,
            batch,
            source: Box::new(self),
        }
    }

    /// The storage error at the root of this error, if any.
    pub fn storage_error(&self) -> Option<&StorageError> {
        match self {
            PopulateError::Storage(e) => Some(e),
            PopulateError::Batch { source, .. } => source.storage_error(),
            _ => None,
        }
    }
}
