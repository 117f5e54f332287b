//! Populate command runner.

use anyhow::Context;
use seed_populate::{run_to_completion, DryRunSink, PopulateMetrics, Seeder, SqlSink};
use seed_populate_mysql::{MySQLPopulateArgs, MySqlExecutor};

/// Fill the database (or preview, in dry-run mode) with deterministic data.
///
/// In dry-run mode no connection is opened. Otherwise the connection is
/// opened before any row is generated and closed on every exit path.
pub async fn run_populate(args: MySQLPopulateArgs) -> anyhow::Result<()> {
    let common = &args.common;
    let plan = common.plan();
    let mut seeder =
        Seeder::new(common.generator(), plan).with_progress_every(common.progress_every);

    let metrics = if common.dry_run {
        tracing::info!(
            "[DRY-RUN] Generating {} rows without a database (seed={})",
            plan.total_rows(),
            common.seed
        );
        let mut sink = DryRunSink::new();
        run_to_completion(&mut seeder, &mut sink)
            .await
            .context("Dry run failed")?
    } else {
        tracing::info!(
            "Populating {} with {} rows (insert mode={}, seed={})",
            args.connection.redacted_url(),
            plan.total_rows(),
            common.insert_mode,
            common.seed
        );
        let executor = MySqlExecutor::connect(&args.connection)
            .await
            .context("Failed to connect to MySQL")?;
        let mut sink = SqlSink::new(executor, common.insert_mode);
        run_to_completion(&mut seeder, &mut sink)
            .await
            .context("Seeding aborted")?
    };

    log_summary(&metrics);
    tracing::info!("Seeder finished! All tables populated.");
    Ok(())
}

fn log_summary(metrics: &PopulateMetrics) {
    for (entity, m) in &metrics.entities {
        tracing::info!(
            "{}: {} generated, {} written, {} skipped, {} batches",
            entity,
            m.rows_generated,
            m.rows_written,
            m.rows_skipped,
            m.batch_count
        );
    }
}
