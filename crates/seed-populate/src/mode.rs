//! Conflict policy for bulk inserts.

use clap::ValueEnum;
use std::fmt;

/// What happens when a row would violate a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum InsertMode {
    /// Any violation aborts the whole batch and the run.
    Normal,

    /// Offending rows are dropped; the rest of the batch is written.
    #[default]
    SkipOnConflict,
}

impl InsertMode {
    pub fn skips_conflicts(&self) -> bool {
        matches!(self, InsertMode::SkipOnConflict)
    }
}

impl fmt::Display for InsertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertMode::Normal => f.write_str("normal"),
            InsertMode::SkipOnConflict => f.write_str("skip-on-conflict"),
        }
    }
}
