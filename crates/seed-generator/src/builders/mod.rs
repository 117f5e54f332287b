//! One builder per entity kind.
//!
//! Builders take the shared [`DataGenerator`](crate::DataGenerator) by
//! mutable reference, so the order in which they are called is part of the
//! generated output.

mod assignments;
mod classes;
mod schools;
mod subjects;
mod users;

pub use assignments::{build_assignments, AssignmentBounds, DUE_WITHIN_YEARS};
pub use classes::{build_classes, MAX_YEAR};
pub use schools::{build_school, build_schools};
pub use subjects::{build_subjects, SUBJECT_NAMES};
pub use users::{build_users, SLUG_MAX_LEN};
