//! Deterministic entity generator for the tahvel seeder.
//!
//! This crate produces the rows written by the populators. All randomness
//! flows through one [`DataGenerator`], a seeded `StdRng` that is passed
//! explicitly to every builder, so the same seed, anchor date and row counts
//! always produce the same rows in the same order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐      ┌──────────────────┐
//! │  DataGenerator  │      │    BatchPlan     │
//! │  - rng (StdRng) │      │  total / size    │
//! │  - anchor date  │      └────────┬─────────┘
//! └────────┬────────┘               │ Batch { number, offset, size }
//!          │                        │
//!          └──────────┬─────────────┘
//!                     ▼
//!              builders::build_*
//!                     │
//!                     ▼
//!     Vec<User | School | Class | Subject | Assignment>
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::{builders, BatchPlan, DataGenerator};
//!
//! let anchor = chrono::NaiveDate::from_ymd_opt(2026, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(0, 0, 0)
//!     .unwrap();
//! let mut generator = DataGenerator::new(123, anchor);
//!
//! for batch in BatchPlan::new(10, 4) {
//!     let users = builders::build_users(&mut generator, &batch);
//!     assert_eq!(users.len(), batch.size);
//! }
//! ```

pub mod batch;
pub mod builders;
pub mod generator;
pub mod slug;

// Re-exports for convenience
pub use batch::{Batch, BatchPlan};
pub use builders::AssignmentBounds;
pub use generator::{default_anchor, DataGenerator, DEFAULT_SEED, DUE_DATE_FORMAT};
pub use slug::slugify;
