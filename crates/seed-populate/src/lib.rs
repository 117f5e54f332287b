//! Batch loading and run orchestration for the tahvel seeder.
//!
//! The pieces, leaves first:
//!
//! - [`InsertStatement`] - one bulk insert derived from a batch of
//!   [`Record`](seed_core::Record)s
//! - [`StatementExecutor`] - the only capability required from storage
//! - [`BatchSink`] - the bulk loader, either [`SqlSink`] (writes through an
//!   executor) or [`DryRunSink`] (no I/O, sample preview)
//! - [`Seeder`] - walks the entity stages in dependency order
//!
//! Database-specific crates (e.g. `seed-populate-mysql`) only implement
//! [`StatementExecutor`].

pub mod args;
pub mod error;
pub mod executor;
pub mod mode;
pub mod plan;
pub mod populator;
pub mod sink;
pub mod statement;

pub use args::CommonPopulateArgs;
pub use error::PopulateError;
pub use executor::{StatementExecutor, StorageError};
pub use mode::InsertMode;
pub use plan::{resolve_count, BatchSizes, SeedPlan};
pub use populator::{run_to_completion, EntityMetrics, PopulateMetrics, Seeder, Stage};
pub use sink::{BatchSink, DryRunSink, LoadOutcome, Preview, SqlSink};
pub use statement::{InsertStatement, StatementError};
