//! Statement execution over a single MySQL connection.

use crate::args::MySQLConnectionArgs;
use crate::error::MySQLPopulatorError;
use crate::insert::prepare;
use async_trait::async_trait;
use mysql_async::{prelude::*, Conn, Params};
use seed_populate::{InsertStatement, StatementExecutor, StorageError};
use tracing::{debug, info};

/// Server error codes treated as constraint violations: duplicate key
/// (1062, 1169, 1586) and foreign key (1451, 1452).
fn is_constraint_code(code: u16) -> bool {
    matches!(code, 1062 | 1169 | 1586 | 1451 | 1452)
}

/// Map a driver error onto the storage error taxonomy.
pub fn classify_error(table: &str, error: mysql_async::Error) -> StorageError {
    match error {
        mysql_async::Error::Server(server) if is_constraint_code(server.code) => {
            StorageError::Constraint {
                table: table.to_string(),
                message: server.message,
            }
        }
        mysql_async::Error::Io(e) => StorageError::Connection(e.to_string()),
        other => StorageError::Other(other.to_string()),
    }
}

/// Executes insert statements on one MySQL connection.
///
/// The connection is opened by [`MySqlExecutor::connect`] and released by
/// [`StatementExecutor::close`].
pub struct MySqlExecutor {
    conn: Option<Conn>,
}

impl MySqlExecutor {
    /// Open and verify a connection.
    pub async fn connect(args: &MySQLConnectionArgs) -> Result<Self, MySQLPopulatorError> {
        if args.db_host.trim().is_empty() {
            return Err(MySQLPopulatorError::Config(
                "database host must not be empty".to_string(),
            ));
        }

        info!("Connecting to {}", args.redacted_url());
        let mut conn = Conn::new(args.opts()).await?;

        // Test connection
        conn.ping().await?;

        Ok(Self { conn: Some(conn) })
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }
}

#[async_trait]
impl StatementExecutor for MySqlExecutor {
    async fn execute(&mut self, statement: &InsertStatement) -> Result<u64, StorageError> {
        let conn = self
            .conn
            .as_mut()
            .ok_or_else(|| StorageError::Connection("connection already closed".to_string()))?;

        let (sql, params) = prepare(statement);

        // Execute the INSERT
        conn.exec_drop(sql, Params::Positional(params))
            .await
            .map_err(|e| classify_error(statement.table(), e))?;

        Ok(conn.affected_rows())
    }

    async fn close(&mut self) -> Result<(), StorageError> {
        if let Some(conn) = self.conn.take() {
            conn.disconnect()
                .await
                .map_err(|e| classify_error("", e))?;
            debug!("MySQL connection closed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_codes() {
        assert!(is_constraint_code(1062));
        assert!(is_constraint_code(1452));
        assert!(!is_constraint_code(1146));
        assert!(!is_constraint_code(2013));
    }

    fn server_error(code: u16, message: &str) -> mysql_async::Error {
        mysql_async::Error::Server(mysql_async::ServerError {
            code,
            message: message.to_string(),
            state: "23000".to_string(),
        })
    }

    #[test]
    fn test_classify_duplicate_key() {
        let err = classify_error(
            "users",
            server_error(1062, "Duplicate entry 'a' for key 'username'"),
        );
        assert_eq!(
            err,
            StorageError::Constraint {
                table: "users".to_string(),
                message: "Duplicate entry 'a' for key 'username'".to_string(),
            }
        );
        assert!(err.is_constraint());
    }

    #[test]
    fn test_classify_foreign_key() {
        let err = classify_error(
            "assignments",
            server_error(1452, "Cannot add or update a child row"),
        );
        assert!(matches!(err, StorageError::Constraint { ref table, .. } if table == "assignments"));
    }

    #[test]
    fn test_classify_other_server_error() {
        let err = classify_error(
            "users",
            server_error(1146, "Table 'tahvel.users' doesn't exist"),
        );
        match err {
            StorageError::Other(message) => assert!(message.contains("1146")),
            other => panic!("expected Other, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let err = classify_error("users", mysql_async::Error::from(io));
        assert!(matches!(err, StorageError::Connection(_)));
        assert!(!err.is_constraint());
    }

    #[tokio::test]
    async fn test_closed_executor_rejects_statements() {
        let mut executor = MySqlExecutor { conn: None };
        let rows = vec![seed_core::Subject {
            name: "Math".to_string(),
        }];
        let statement =
            InsertStatement::build(&rows, seed_populate::InsertMode::Normal).unwrap();

        let err = executor.execute(&statement).await.unwrap_err();

        assert!(matches!(err, StorageError::Connection(_)));
        assert!(executor.close().await.is_ok());
        assert!(!executor.is_open());
    }
}
