//! Core types for the tahvel seeder.
//!
//! This crate holds the row-level vocabulary shared by the generator and the
//! populators:
//!
//! - [`SeedValue`] - a single bindable column value
//! - [`Record`] - a row type with a table name and a column list fixed at
//!   compile time
//! - [`User`], [`School`], [`Class`], [`Subject`], [`Assignment`] - the five
//!   seeded entities
//! - [`EntityKind`] - identifies an entity pipeline
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator       (builds records from a seeded rng)
//!    │
//!    ├─── seed-populate        (batches records into statements)
//!    └─── seed-populate-mysql  (binds SeedValue to MySQL parameters)
//! ```

pub mod entities;
pub mod record;
pub mod values;

pub use entities::{Assignment, Class, EntityKind, Role, School, Subject, User};
pub use record::Record;
pub use values::SeedValue;
