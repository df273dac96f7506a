use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::AppState;
use crate::api::models::{HealthCheck, HealthReport};
use crate::database;

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let database_ok = probe_database(&state);

    let report = HealthReport {
        status: overall(database_ok),
        checks: vec![
            HealthCheck {
                name: "database",
                status: overall(database_ok),
            },
            HealthCheck {
                name: "self",
                status: "healthy",
            },
        ],
    };

    let code = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(report))
}

fn probe_database(state: &AppState) -> bool {
    let Ok(conn) = database::get_connection(&state.pool) else {
        return false;
    };
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .is_ok()
}

fn overall(healthy: bool) -> &'static str {
    if healthy {
        "healthy"
    } else {
        "unhealthy"
    }
}
