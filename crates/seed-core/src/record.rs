//! The row abstraction consumed by the bulk loader.

use crate::values::SeedValue;
use serde::Serialize;

/// A row type bound to one table.
///
/// The column list is known at compile time, so statements are derived
/// mechanically from it instead of by inspecting row contents.
/// `values()` must return exactly one value per entry of `COLUMNS`, in the
/// same order.
pub trait Record: Serialize + Send + Sync {
    /// Target table name.
    const TABLE: &'static str;

    /// Column names in insertion order.
    const COLUMNS: &'static [&'static str];

    /// Column values aligned with [`Record::COLUMNS`].
    fn values(&self) -> Vec<SeedValue>;
}
