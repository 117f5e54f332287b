//! Batched INSERT rendering for MySQL population.

use mysql_async::Value;
use seed_core::SeedValue;
use seed_populate::{InsertMode, InsertStatement};

/// MySQL value wrapper for type-safe conversions.
#[derive(Debug, Clone, PartialEq)]
pub struct MySQLValue(pub Value);

impl MySQLValue {
    /// Get the inner mysql_async::Value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<SeedValue> for MySQLValue {
    fn from(value: SeedValue) -> Self {
        match value {
            SeedValue::Int(i) => MySQLValue(Value::Int(i)),
            SeedValue::Text(s) => MySQLValue(Value::Bytes(s.into_bytes())),
        }
    }
}

/// Quote an identifier with backticks.
fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// SQL text for a multi-row insert with positional `?` placeholders.
///
/// Skip-on-conflict renders `INSERT IGNORE`, which drops rows that collide
/// with an existing unique key and writes the rest.
///
/// `IGNORE` also downgrades other row errors to warnings: over-long strings
/// are truncated and NULLs in NOT NULL columns get the column default. The
/// builders never produce such rows, but a schema narrower than the
/// generated values will be written silently in this mode. Use
/// [`InsertMode::Normal`] to have those fail the run.
pub fn render_insert(
    table: &str,
    columns: &[&str],
    row_count: usize,
    mode: InsertMode,
) -> String {
    let verb = match mode {
        InsertMode::Normal => "INSERT INTO",
        InsertMode::SkipOnConflict => "INSERT IGNORE INTO",
    };

    let col_placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
    let row_template = format!("({})", col_placeholders.join(", "));
    let rows_template: Vec<&str> = (0..row_count).map(|_| row_template.as_str()).collect();

    format!(
        "{} {} ({}) VALUES {}",
        verb,
        quote_identifier(table),
        columns
            .iter()
            .map(|c| quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", "),
        rows_template.join(", ")
    )
}

/// SQL text and positional parameters for `statement`.
pub fn prepare(statement: &InsertStatement) -> (String, Vec<Value>) {
    let sql = render_insert(
        statement.table(),
        statement.columns(),
        statement.row_count(),
        statement.mode(),
    );
    let params = statement
        .params()
        .iter()
        .cloned()
        .map(|v| MySQLValue::from(v).into_inner())
        .collect();
    (sql, params)
}
