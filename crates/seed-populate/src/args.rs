//! Common CLI argument definitions shared by all populators.

use crate::mode::InsertMode;
use crate::plan::{resolve_count, SeedPlan};
use chrono::{NaiveDate, NaiveTime};
use clap::builder::FalseyValueParser;
use clap::Args;
use seed_generator::{default_anchor, DataGenerator, DEFAULT_SEED};
use std::num::NonZeroU64;

/// Common arguments shared by all populators.
///
/// Every option can also be given through the environment.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Generate rows and print samples without touching the database
    #[arg(long, env = "DRY_RUN", value_parser = FalseyValueParser::new())]
    pub dry_run: bool,

    /// What to do when a row collides with an existing unique key
    #[arg(long, env = "INSERT_MODE", value_enum, default_value_t = InsertMode::SkipOnConflict)]
    pub insert_mode: InsertMode,

    /// Number of users (default 100000, dry-run 100)
    #[arg(long, env = "USER_COUNT")]
    pub user_count: Option<String>,

    /// Number of schools (default 50)
    #[arg(long, env = "SCHOOL_COUNT")]
    pub school_count: Option<String>,

    /// Number of classes (default 500, dry-run 50)
    #[arg(long, env = "CLASS_COUNT")]
    pub class_count: Option<String>,

    /// Number of assignments (default 2000000, dry-run 500)
    #[arg(long, env = "ASSIGNMENT_COUNT")]
    pub assignment_count: Option<String>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Reference date (YYYY-MM-DD) that due dates are generated after; defaults to today (UTC).
    /// Pin it to get identical due dates from runs on different days
    #[arg(long, env = "SEED_ANCHOR_DATE")]
    pub anchor_date: Option<NaiveDate>,

    /// Report assignment progress every N batches
    #[arg(long, env = "PROGRESS_EVERY", default_value = "20")]
    pub progress_every: NonZeroU64,
}

impl CommonPopulateArgs {
    /// Row counts for this run, falling back to the mode's defaults.
    pub fn plan(&self) -> SeedPlan {
        let defaults = SeedPlan::defaults(self.dry_run);
        SeedPlan {
            users: resolve_count("USER_COUNT", self.user_count.as_deref(), defaults.users),
            schools: resolve_count(
                "SCHOOL_COUNT",
                self.school_count.as_deref(),
                defaults.schools,
            ),
            classes: resolve_count("CLASS_COUNT", self.class_count.as_deref(), defaults.classes),
            assignments: resolve_count(
                "ASSIGNMENT_COUNT",
                self.assignment_count.as_deref(),
                defaults.assignments,
            ),
            batch_sizes: defaults.batch_sizes,
        }
    }

    /// A fresh generator seeded from these arguments.
    pub fn generator(&self) -> DataGenerator {
        let anchor = self
            .anchor_date
            .map(|date| date.and_time(NaiveTime::MIN))
            .unwrap_or_else(default_anchor);
        DataGenerator::new(self.seed, anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonPopulateArgs,
    }

    fn parse(args: &[&str]) -> CommonPopulateArgs {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().common
    }

    #[test]
    fn test_flags() {
        let args = parse(&[
            "--dry-run",
            "--insert-mode",
            "normal",
            "--user-count",
            "10",
            "--class-count",
            "nope",
            "--seed",
            "7",
            "--anchor-date",
            "2026-01-31",
        ]);

        assert!(args.dry_run);
        assert_eq!(args.insert_mode, InsertMode::Normal);
        assert_eq!(args.seed, 7);

        let plan = args.plan();
        assert_eq!(plan.users, 10);
        assert_eq!(plan.classes, 50);
        assert_eq!(plan.assignments, 500);

        let generator = args.generator();
        assert_eq!(generator.seed(), 7);
        assert_eq!(generator.anchor().to_string(), "2026-01-31 00:00:00");
    }

    #[test]
    fn test_pinned_anchor_reproduces_due_dates() {
        let argv = ["--seed", "9", "--anchor-date", "2026-03-01"];
        let mut first = parse(&argv).generator();
        let mut second = parse(&argv).generator();

        assert_eq!(first.future_timestamp(1), second.future_timestamp(1));
    }

    #[test]
    fn test_anchor_help_mentions_pinning() {
        use clap::CommandFactory;

        let help = TestCli::command().render_long_help().to_string();
        assert!(help.contains("Pin it to get identical due dates"));
    }

    #[test]
    fn test_rejects_unknown_insert_mode() {
        let result = TestCli::try_parse_from(["test", "--insert-mode", "upsert"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_production_defaults() {
        let overridden = ["DRY_RUN", "USER_COUNT", "INSERT_MODE", "PROGRESS_EVERY"]
            .iter()
            .any(|name| std::env::var_os(name).is_some());
        if overridden {
            return;
        }

        let args = TestCli::try_parse_from(["test", "--seed", "123"]).unwrap().common;

        assert!(!args.dry_run);
        assert_eq!(args.insert_mode, InsertMode::SkipOnConflict);
        assert_eq!(args.plan().users, 100_000);
        assert_eq!(args.progress_every.get(), 20);
    }
}
