//! MySQL/MariaDB backend for the tahvel seeder.
//!
//! Provides the connection arguments, the SQL text for bulk inserts and a
//! [`MySqlExecutor`] implementing
//! [`StatementExecutor`](seed_populate::StatementExecutor) over a single
//! `mysql_async` connection.

pub mod args;
pub mod error;
pub mod executor;
pub mod insert;

pub use args::{MySQLConnectionArgs, MySQLPopulateArgs};
pub use error::MySQLPopulatorError;
pub use executor::MySqlExecutor;
pub use insert::{render_insert, MySQLValue};
