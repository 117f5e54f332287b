//! Command-line interface for tahvel-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Preview generated rows without a database
//! tahvel-seed --dry-run
//!
//! # Populate MariaDB with the production volumes
//! DB_HOST=localhost DB_PASSWORD=secret tahvel-seed
//!
//! # Small deterministic run that fails loudly on duplicates
//! tahvel-seed --insert-mode normal \
//!   --user-count 10 --school-count 2 --class-count 4 --assignment-count 20 \
//!   --anchor-date 2026-09-01
//! ```
//!
//! Every flag can also be set through the environment (`DRY_RUN`,
//! `INSERT_MODE`, `USER_COUNT`, `DB_HOST`, ...) or a `.env` file.

mod populate;

use clap::Parser;
use seed_populate_mysql::MySQLPopulateArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tahvel-seed")]
#[command(about = "Fill the tahvel school database with deterministic synthetic data")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: MySQLPopulateArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Env vars can be set externally, a missing .env is fine
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    populate::run_populate(cli.args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_dry_run_flag() {
        let cli = Cli::try_parse_from(["tahvel-seed", "--dry-run", "--user-count", "10"]).unwrap();
        assert!(cli.args.common.dry_run);
        assert_eq!(cli.args.common.plan().users, 10);
    }
}
