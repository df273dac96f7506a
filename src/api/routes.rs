use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    health::health_check,
    matches::{create_match, delete_match, get_match, get_matches, update_match},
    players::{create_player, delete_player, get_player, get_players, update_player},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/players", get(get_players).post(create_player))
        .route(
            "/api/players/:id",
            get(get_player).put(update_player).delete(delete_player),
        )
        .route("/api/matches", get(get_matches).post(create_match))
        .route(
            "/api/matches/:id",
            get(get_match).put(update_match).delete(delete_match),
        )
        .route("/health", get(health_check))
        .with_state(state)
}
