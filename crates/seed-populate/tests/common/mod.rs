//! In-memory storage used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use seed_core::SeedValue;
use seed_generator::DataGenerator;
use seed_populate::{InsertStatement, StatementExecutor, StorageError};
use std::collections::{BTreeMap, HashSet};

pub const SEED: u64 = 123;

pub fn generator() -> DataGenerator {
    let anchor = NaiveDate::from_ymd_opt(2026, 10, 17)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    DataGenerator::new(SEED, anchor)
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<SeedValue>>,
}

/// Tables held in memory with per-table unique columns.
///
/// A statement either writes all its accepted rows or nothing.
#[derive(Debug, Default)]
pub struct MemoryExecutor {
    pub tables: BTreeMap<&'static str, StoredTable>,
    unique: BTreeMap<&'static str, Vec<&'static str>>,
    pub statements: usize,
    pub closed: bool,
    close_calls: usize,
    fail_at: Option<(usize, StorageError)>,
}

impl MemoryExecutor {
    /// Unique keys mirror the seeded schema.
    pub fn new() -> Self {
        let mut unique = BTreeMap::new();
        unique.insert("users", vec!["username", "email"]);
        unique.insert("schools", vec!["name"]);
        unique.insert("classes", vec!["name"]);
        unique.insert("subjects", vec!["name"]);
        Self {
            unique,
            ..Default::default()
        }
    }

    /// Fail the `n`-th statement (1-based) with `error`.
    pub fn failing_at(mut self, n: usize, error: StorageError) -> Self {
        self.fail_at = Some((n, error));
        self
    }

    pub fn row_count(&self, table: &str) -> usize {
        self.tables.get(table).map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn column(&self, table: &str, column: &str) -> Vec<SeedValue> {
        let Some(stored) = self.tables.get(table) else {
            return Vec::new();
        };
        let Some(position) = stored.columns.iter().position(|c| *c == column) else {
            return Vec::new();
        };
        stored.rows.iter().map(|row| row[position].clone()).collect()
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls
    }
}

#[async_trait]
impl StatementExecutor for MemoryExecutor {
    async fn execute(&mut self, statement: &InsertStatement) -> Result<u64, StorageError> {
        if self.closed {
            return Err(StorageError::Connection("connection closed".to_string()));
        }
        self.statements += 1;
        if let Some((n, error)) = &self.fail_at {
            if *n == self.statements {
                return Err(error.clone());
            }
        }

        let table = statement.table();
        let columns = statement.columns();
        let unique_positions: Vec<usize> = self
            .unique
            .get(table)
            .map(|names| {
                names
                    .iter()
                    .filter_map(|name| columns.iter().position(|c| c == name))
                    .collect()
            })
            .unwrap_or_default();

        let stored = self.tables.entry(table).or_insert_with(|| StoredTable {
            columns: columns.to_vec(),
            rows: Vec::new(),
        });

        let mut seen: Vec<HashSet<SeedValue>> = unique_positions
            .iter()
            .map(|&p| stored.rows.iter().map(|row| row[p].clone()).collect())
            .collect();

        let mut accepted = Vec::new();
        for row in statement.rows() {
            let conflict = unique_positions
                .iter()
                .zip(&seen)
                .any(|(&p, values)| values.contains(&row[p]));
            if conflict {
                if statement.mode().skips_conflicts() {
                    continue;
                }
                return Err(StorageError::Constraint {
                    table: table.to_string(),
                    message: "duplicate entry".to_string(),
                });
            }
            for (&p, values) in unique_positions.iter().zip(seen.iter_mut()) {
                values.insert(row[p].clone());
            }
            accepted.push(row.to_vec());
        }

        let written = accepted.len() as u64;
        stored.rows.extend(accepted);
        Ok(written)
    }

    async fn close(&mut self) -> Result<(), StorageError> {
        self.closed = true;
        self.close_calls += 1;
        Ok(())
    }
}
