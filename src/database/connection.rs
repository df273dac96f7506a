use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(database_path);
    build_pool(manager)
}

// SQLite ships with foreign keys off; the cascade rules in the schema need
// them on for every connection. The busy timeout lets writers queue on the
// immediate-transaction lock instead of failing.
const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;";

fn build_manager(path: &str) -> SqliteConnectionManager {
    SqliteConnectionManager::file(path).with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS))
}

fn build_pool(manager: SqliteConnectionManager) -> Result<DbPool> {
    r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create database connection pool")
}

/// Pool over a single shared in-memory database with the schema applied.
/// Every `:memory:` connection is its own database, so the pool is capped at
/// one connection. Used by tests and ephemeral tooling.
pub fn create_pool_in_memory() -> Result<DbPool> {
    let manager =
        SqliteConnectionManager::memory().with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .context("Failed to create in-memory database pool")?;

    let conn = get_connection(&pool)?;
    super::setup::init_database(&conn)?;
    drop(conn);

    Ok(pool)
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
