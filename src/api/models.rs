use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::scheduling::MatchStatus;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub ranking: i32,
    pub preferred_cue: Option<String>,
    pub profile_picture_url: Option<String>,
}

// Full replace: same shape as create, required fields included.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub ranking: i32,
    pub preferred_cue: Option<String>,
    pub profile_picture_url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub ranking: i32,
    pub preferred_cue: Option<String>,
    pub profile_picture_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub player1_id: Option<i64>,
    pub player2_id: Option<i64>,
    pub start_time: Option<NaiveDateTime>,
    pub table_number: Option<i32>,
}

// Partial update: absent fields are left as stored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMatchRequest {
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub winner_id: Option<i64>,
    pub table_number: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub id: i64,
    pub player1_id: i64,
    pub player1_name: String,
    pub player2_id: i64,
    pub player2_name: String,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub winner_id: Option<i64>,
    pub winner_name: Option<String>,
    pub table_number: Option<i32>,
    pub status: MatchStatus,
}

#[derive(Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub checks: Vec<HealthCheck>,
}

#[derive(Serialize)]
pub struct HealthCheck {
    pub name: &'static str,
    pub status: &'static str,
}
