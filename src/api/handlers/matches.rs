use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::NaiveDateTime;
use std::sync::Arc;

use super::{begin_immediate, require_value, AppState, MatchListParams};
use crate::api::models::{CreateMatchRequest, MatchResponse, UpdateMatchRequest};
use crate::database::{
    self,
    models::{MatchFilter, MatchWithPlayers},
};
use crate::errors::ApiError;
use crate::scheduling::{has_conflict, Interval, MatchStatus};

pub async fn create_match(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateMatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let player1_id = require_value(body.player1_id, "player1Id")?;
    let player2_id = require_value(body.player2_id, "player2Id")?;
    let start_time = require_value(body.start_time, "startTime")?;

    if player1_id == player2_id {
        return Err(ApiError::Validation(
            "player1Id and player2Id must be different players".to_string(),
        ));
    }

    let default_duration = state.config.scheduling.default_duration();
    let candidate = Interval::with_default_duration(start_time, None, default_duration);

    let mut conn = database::get_connection(&state.pool)?;
    let tx = begin_immediate(&mut conn)?;

    let player1 =
        database::players::find_by_id(&tx, player1_id)?.ok_or(ApiError::NotFound("player"))?;
    let player2 =
        database::players::find_by_id(&tx, player2_id)?.ok_or(ApiError::NotFound("player"))?;

    for player_id in [player1_id, player2_id] {
        let booked = database::matches::booked_slots_for_player(&tx, player_id)?;
        if has_conflict(&booked, candidate, None, default_duration) {
            return Err(ApiError::Conflict(
                "One of the players has another match at this time.".to_string(),
            ));
        }
    }

    let created =
        database::matches::insert_match(&tx, player1_id, player2_id, start_time, body.table_number)?;
    tx.commit().context("Failed to commit match creation")?;

    let response = MatchResponse {
        id: created.id,
        player1_id,
        player1_name: player1.name,
        player2_id,
        player2_name: player2.name,
        start_time: created.start_time,
        end_time: created.end_time,
        winner_id: created.winner_id,
        winner_name: None,
        table_number: created.table_number,
        status: MatchStatus::derive(created.start_time, created.end_time, state.clock.now()),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_matches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MatchListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = MatchFilter { date: params.date };

    let conn = database::get_connection(&state.pool)?;
    let rows = database::matches::list_with_players(&conn, &filter)?;

    // Unrecognized status values fall through unfiltered
    let status_filter = params.status.as_deref().and_then(MatchStatus::parse);
    let now = state.clock.now();

    let items: Vec<MatchResponse> = rows
        .into_iter()
        .map(|row| to_response(row, now))
        .filter(|m| status_filter.is_none_or(|wanted| m.status == wanted))
        .collect();

    Ok(Json(items))
}

pub async fn get_match(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let conn = database::get_connection(&state.pool)?;
    let row =
        database::matches::find_with_players(&conn, id)?.ok_or(ApiError::NotFound("match"))?;

    Ok(Json(to_response(row, state.clock.now())))
}

pub async fn update_match(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateMatchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let default_duration = state.config.scheduling.default_duration();

    let mut conn = database::get_connection(&state.pool)?;
    let tx = begin_immediate(&mut conn)?;

    let existing = database::matches::find_by_id(&tx, id)?.ok_or(ApiError::NotFound("match"))?;

    if let Some(winner_id) = body.winner_id {
        if winner_id != existing.player1_id && winner_id != existing.player2_id {
            return Err(ApiError::Validation(
                "winnerId must be one of the match participants".to_string(),
            ));
        }
    }

    // Only a changed start time re-opens the booking question. The candidate
    // end is the caller-supplied one or start + default; the stored end is
    // deliberately not consulted.
    let mut start_time = existing.start_time;
    if let Some(new_start) = body.start_time {
        if new_start != existing.start_time {
            let candidate = Interval::with_default_duration(new_start, body.end_time, default_duration);
            for player_id in [existing.player1_id, existing.player2_id] {
                let booked = database::matches::booked_slots_for_player(&tx, player_id)?;
                if has_conflict(&booked, candidate, Some(existing.id), default_duration) {
                    return Err(ApiError::Conflict(
                        "Double-booking detected on update.".to_string(),
                    ));
                }
            }
            start_time = new_start;
        }
    }

    let end_time = body.end_time.or(existing.end_time);
    let winner_id = body.winner_id.or(existing.winner_id);
    let table_number = body.table_number.or(existing.table_number);

    database::matches::update_match(&tx, id, start_time, end_time, winner_id, table_number)?;
    tx.commit().context("Failed to commit match update")?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_match(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let conn = database::get_connection(&state.pool)?;
    let existing = database::matches::find_by_id(&conn, id)?.ok_or(ApiError::NotFound("match"))?;

    if already_started(existing.start_time, state.clock.now()) {
        return Err(ApiError::Conflict(
            "Cannot delete a match that has already started.".to_string(),
        ));
    }

    database::matches::delete_match(&conn, id)?;
    Ok(StatusCode::NO_CONTENT)
}

fn already_started(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_time <= now
}

fn to_response(row: MatchWithPlayers, now: NaiveDateTime) -> MatchResponse {
    MatchResponse {
        id: row.id,
        player1_id: row.player1_id,
        player1_name: row.player1_name,
        player2_id: row.player2_id,
        player2_name: row.player2_name,
        start_time: row.start_time,
        end_time: row.end_time,
        winner_id: row.winner_id,
        winner_name: row.winner_name,
        table_number: row.table_number,
        status: MatchStatus::derive(row.start_time, row.end_time, now),
    }
}
