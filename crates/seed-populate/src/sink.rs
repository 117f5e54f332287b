//! The bulk loader: where generated batches go.

use crate::error::PopulateError;
use crate::executor::StatementExecutor;
use crate::mode::InsertMode;
use crate::statement::InsertStatement;
use async_trait::async_trait;
use seed_core::Record;
use tracing::{debug, info, warn};

/// Rows shown per batch in dry-run mode.
pub const PREVIEW_ROWS: usize = 3;

/// Result of loading one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Rows handed to the loader.
    pub submitted: usize,
    /// Rows persisted by storage.
    pub written: u64,
    /// Rows dropped because of a conflict.
    pub skipped: u64,
}

/// Destination for batches of homogeneous records.
#[async_trait]
pub trait BatchSink: Send {
    /// Load one batch. An empty batch is a no-op and succeeds.
    async fn load<R: Record>(&mut self, rows: &[R]) -> Result<LoadOutcome, PopulateError>;

    /// Release any storage resources. Safe to call more than once.
    async fn close(&mut self) -> Result<(), PopulateError>;

    /// Whether this sink only previews rows.
    fn is_dry_run(&self) -> bool {
        false
    }
}

/// Writes every batch as one bulk insert through a [`StatementExecutor`].
pub struct SqlSink<E> {
    executor: E,
    mode: InsertMode,
}

impl<E: StatementExecutor> SqlSink<E> {
    pub fn new(executor: E, mode: InsertMode) -> Self {
        Self { executor, mode }
    }

    pub fn mode(&self) -> InsertMode {
        self.mode
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn into_executor(self) -> E {
        self.executor
    }
}

#[async_trait]
impl<E: StatementExecutor> BatchSink for SqlSink<E> {
    async fn load<R: Record>(&mut self, rows: &[R]) -> Result<LoadOutcome, PopulateError> {
        if rows.is_empty() {
            return Ok(LoadOutcome::default());
        }

        let statement = InsertStatement::build(rows, self.mode)?;
        debug!(
            "Inserting {} rows into {} ({} parameters, mode={})",
            statement.row_count(),
            statement.table(),
            statement.params().len(),
            self.mode
        );

        let written = self.executor.execute(&statement).await?;
        let skipped = (rows.len() as u64).saturating_sub(written);
        if skipped > 0 {
            warn!(
                "Skipped {} conflicting rows in {} ({} of {} written)",
                skipped,
                R::TABLE,
                written,
                rows.len()
            );
        }

        Ok(LoadOutcome {
            submitted: rows.len(),
            written,
            skipped,
        })
    }

    async fn close(&mut self) -> Result<(), PopulateError> {
        self.executor.close().await?;
        Ok(())
    }
}

/// Sample rows captured by a [`DryRunSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub table: &'static str,
    /// Size of the batch the sample was taken from.
    pub batch_rows: usize,
    pub sample: Vec<serde_json::Value>,
}

/// Performs no storage I/O; logs the first rows of every batch instead.
#[derive(Debug, Default)]
pub struct DryRunSink {
    previews: Vec<Preview>,
    rows_seen: u64,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Previews captured so far, one per non-empty batch.
    pub fn previews(&self) -> &[Preview] {
        &self.previews
    }

    /// Total rows handed to this sink.
    pub fn rows_seen(&self) -> u64 {
        self.rows_seen
    }
}

#[async_trait]
impl BatchSink for DryRunSink {
    async fn load<R: Record>(&mut self, rows: &[R]) -> Result<LoadOutcome, PopulateError> {
        if rows.is_empty() {
            return Ok(LoadOutcome::default());
        }

        let sample: Vec<serde_json::Value> = rows
            .iter()
            .take(PREVIEW_ROWS)
            .map(|row| serde_json::to_value(row).unwrap_or(serde_json::Value::Null))
            .collect();

        info!("DRY RUN - {}: sample {} rows:", R::TABLE, sample.len());
        for row in &sample {
            info!("  {}", row);
        }

        self.rows_seen += rows.len() as u64;
        self.previews.push(Preview {
            table: R::TABLE,
            batch_rows: rows.len(),
            sample,
        });

        Ok(LoadOutcome {
            submitted: rows.len(),
            written: 0,
            skipped: 0,
        })
    }

    async fn close(&mut self) -> Result<(), PopulateError> {
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
