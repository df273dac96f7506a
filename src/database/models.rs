use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub ranking: i32,
    pub preferred_cue: Option<String>,
    pub profile_picture_url: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Match {
    pub id: i64,
    pub player1_id: i64,
    pub player2_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub winner_id: Option<i64>,
    pub table_number: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
}

// DTO for joined queries
#[derive(Debug, Clone)]
pub struct MatchWithPlayers {
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
}

#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    pub name_contains: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub date: Option<NaiveDate>,
}
