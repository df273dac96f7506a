use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{require_text, AppState, PlayerListParams};
use crate::api::models::{CreatePlayerRequest, PlayerResponse, UpdatePlayerRequest};
use crate::database::{
    self,
    models::{Player, PlayerFilter},
};
use crate::errors::ApiError;

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreatePlayerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require_text(body.name.as_deref(), "name")?;
    let profile_picture_url = require_text(body.profile_picture_url.as_deref(), "profilePictureUrl")?;

    let conn = database::get_connection(&state.pool)?;
    let created = database::players::insert_player(
        &conn,
        name,
        body.ranking,
        body.preferred_cue.as_deref(),
        profile_picture_url,
    )?;

    Ok((StatusCode::CREATED, Json(to_response(created))))
}

pub async fn get_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlayerListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = PlayerFilter {
        name_contains: params.name.filter(|name| !name.trim().is_empty()),
    };

    let conn = database::get_connection(&state.pool)?;
    let players = database::players::list(&conn, &filter)?;

    let items: Vec<PlayerResponse> = players.into_iter().map(to_response).collect();
    Ok(Json(items))
}

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let conn = database::get_connection(&state.pool)?;
    let player = database::players::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("player"))?;

    Ok(Json(to_response(player)))
}

pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdatePlayerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require_text(body.name.as_deref(), "name")?;
    let profile_picture_url = require_text(body.profile_picture_url.as_deref(), "profilePictureUrl")?;

    let conn = database::get_connection(&state.pool)?;
    let updated = database::players::update_player(
        &conn,
        id,
        name,
        body.ranking,
        body.preferred_cue.as_deref(),
        profile_picture_url,
    )?;

    if !updated {
        return Err(ApiError::NotFound("player"));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let conn = database::get_connection(&state.pool)?;
    let deleted = database::players::delete_player(&conn, id)?;

    if !deleted {
        return Err(ApiError::NotFound("player"));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn to_response(player: Player) -> PlayerResponse {
    PlayerResponse {
        id: player.id,
        name: player.name,
        ranking: player.ranking,
        preferred_cue: player.preferred_cue,
        profile_picture_url: player.profile_picture_url,
    }
}
