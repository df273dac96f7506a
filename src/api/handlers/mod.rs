use anyhow::Context;
use chrono::NaiveDate;
use rusqlite::{Transaction, TransactionBehavior};
use serde::Deserialize;
use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::database::{DbConn, DbPool};
use crate::errors::ApiError;
use crate::scheduling::Clock;

pub mod health;
pub mod matches;
pub mod players;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
    pub clock: Arc<dyn Clock>,
}

#[derive(Deserialize)]
pub struct PlayerListParams {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct MatchListParams {
    pub date: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Conflict check and row write must form one unit of work; IMMEDIATE takes
/// the write lock up front, so no other writer can slip in between them.
pub fn begin_immediate(conn: &mut DbConn) -> Result<Transaction<'_>, ApiError> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .context("Failed to begin transaction")?;
    Ok(tx)
}

pub fn require_text<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ApiError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ApiError::Validation(format!("{field} is required"))),
    }
}

pub fn require_value<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::Validation(format!("{field} is required")))
}
