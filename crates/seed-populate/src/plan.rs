//! Row counts and batch sizes for one run.

use seed_generator::builders::SUBJECT_NAMES;
use tracing::warn;

/// Rows per generated (and inserted) batch, per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSizes {
    pub users: usize,
    pub schools: usize,
    pub classes: usize,
    pub assignments: usize,
}

impl Default for BatchSizes {
    fn default() -> Self {
        Self {
            users: 5000,
            schools: 1,
            classes: 100,
            assignments: 5000,
        }
    }
}

/// How many rows of each entity a run generates.
///
/// Subjects are a fixed set and have no count of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub users: u64,
    pub schools: u64,
    pub classes: u64,
    pub assignments: u64,
    pub batch_sizes: BatchSizes,
}

impl SeedPlan {
    /// Default counts. Dry runs use small counts suited to inspection.
    pub fn defaults(dry_run: bool) -> Self {
        if dry_run {
            Self {
                users: 100,
                schools: 50,
                classes: 50,
                assignments: 500,
                batch_sizes: BatchSizes::default(),
            }
        } else {
            Self {
                users: 100_000,
                schools: 50,
                classes: 500,
                assignments: 2_000_000,
                batch_sizes: BatchSizes::default(),
            }
        }
    }

    /// Explicit counts with the default batch sizes.
    pub fn with_counts(users: u64, schools: u64, classes: u64, assignments: u64) -> Self {
        Self {
            users,
            schools,
            classes,
            assignments,
            batch_sizes: BatchSizes::default(),
        }
    }

    pub fn with_batch_sizes(mut self, batch_sizes: BatchSizes) -> Self {
        self.batch_sizes = batch_sizes;
        self
    }

    pub fn subjects(&self) -> u64 {
        SUBJECT_NAMES.len() as u64
    }

    /// Total rows across all entities.
    pub fn total_rows(&self) -> u64 {
        self.users + self.schools + self.classes + self.subjects() + self.assignments
    }
}

/// Resolve a count override.
///
/// Anything that is not a positive integer falls back to `default` with a
/// warning instead of failing the run.
pub fn resolve_count(name: &str, raw: Option<&str>, default: u64) -> u64 {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<u64>() {
        Ok(count) if count > 0 => count,
        _ => {
            warn!(
                "Ignoring {}={:?}: not a positive integer, using default {}",
                name, raw, default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let dry = SeedPlan::defaults(true);
        assert_eq!((dry.users, dry.classes, dry.assignments), (100, 50, 500));

        let full = SeedPlan::defaults(false);
        assert_eq!(
            (full.users, full.schools, full.classes, full.assignments),
            (100_000, 50, 500, 2_000_000)
        );
        assert_eq!(full.subjects(), 5);
    }

    #[test]
    fn test_resolve_count() {
        assert_eq!(resolve_count("USER_COUNT", None, 100), 100);
        assert_eq!(resolve_count("USER_COUNT", Some("250"), 100), 250);
        assert_eq!(resolve_count("USER_COUNT", Some(" 7 "), 100), 7);
        assert_eq!(resolve_count("USER_COUNT", Some("0"), 100), 100);
        assert_eq!(resolve_count("USER_COUNT", Some("-3"), 100), 100);
        assert_eq!(resolve_count("USER_COUNT", Some("lots"), 100), 100);
        assert_eq!(resolve_count("USER_COUNT", Some(""), 100), 100);
    }

    #[test]
    fn test_total_rows() {
        assert_eq!(SeedPlan::with_counts(10, 2, 4, 20).total_rows(), 41);
    }
}
