use anyhow::{Context, Result};
use rusqlite::Connection;

/// Apply the embedded schema. Every statement is IF NOT EXISTS, so this is
/// safe to run on an already-populated database.
pub fn init_database(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        if !statement.trim().is_empty() {
            execute_sql(conn, statement)
                .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
        }
    }

    log::info!("Database schema ready");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
