use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{Match, MatchFilter, MatchWithPlayers};
use crate::scheduling::BookedSlot;

const MATCH_COLUMNS: &str =
    "id, player1_id, player2_id, start_time, end_time, winner_id, table_number, created_at";

pub fn insert_match(
    conn: &Connection,
    player1_id: i64,
    player2_id: i64,
    start_time: NaiveDateTime,
    table_number: Option<i32>,
) -> Result<Match> {
    let sql = "INSERT INTO matches (player1_id, player2_id, start_time, table_number) VALUES (?1, ?2, ?3, ?4) RETURNING id, player1_id, player2_id, start_time, end_time, winner_id, table_number, created_at";

    conn.query_row(
        sql,
        params![player1_id, player2_id, start_time, table_number],
        parse_match_row,
    )
    .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        player1_id: row.get(1)?,
        player2_id: row.get(2)?,
        start_time: row.get(3)?,
        end_time: row.get(4)?,
        winner_id: row.get(5)?,
        table_number: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Match>> {
    let sql = format!("SELECT {MATCH_COLUMNS} FROM matches WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_match_row)
        .optional()
        .context("Failed to query match by id")
}

const MATCH_WITH_PLAYERS_SELECT: &str = "
    SELECT
        m.id,
        m.player1_id,
        p1.name AS player1_name,
        m.player2_id,
        p2.name AS player2_name,
        m.start_time,
        m.end_time,
        m.winner_id,
        w.name AS winner_name,
        m.table_number
    FROM matches m
    JOIN players p1 ON m.player1_id = p1.id
    JOIN players p2 ON m.player2_id = p2.id
    LEFT JOIN players w ON m.winner_id = w.id
";

fn parse_match_with_players_row(row: &rusqlite::Row) -> rusqlite::Result<MatchWithPlayers> {
    Ok(MatchWithPlayers {
        id: row.get(0)?,
        player1_id: row.get(1)?,
        player1_name: row.get(2)?,
        player2_id: row.get(3)?,
        player2_name: row.get(4)?,
        start_time: row.get(5)?,
        end_time: row.get(6)?,
        winner_id: row.get(7)?,
        winner_name: row.get(8)?,
        table_number: row.get(9)?,
    })
}

pub fn find_with_players(conn: &Connection, id: i64) -> Result<Option<MatchWithPlayers>> {
    let sql = format!("{MATCH_WITH_PLAYERS_SELECT} WHERE m.id = ?1");

    conn.query_row(&sql, params![id], parse_match_with_players_row)
        .optional()
        .context("Failed to query match with players")
}

pub fn list_with_players(conn: &Connection, filter: &MatchFilter) -> Result<Vec<MatchWithPlayers>> {
    match filter.date {
        Some(date) => {
            let sql =
                format!("{MATCH_WITH_PLAYERS_SELECT} WHERE date(m.start_time) = ?1 ORDER BY m.start_time");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params![date], parse_match_with_players_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        }
        None => {
            let sql = format!("{MATCH_WITH_PLAYERS_SELECT} ORDER BY m.start_time");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([], parse_match_with_players_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        }
    }
}

/// Every booking involving the player, either seat, feeding the conflict check.
pub fn booked_slots_for_player(conn: &Connection, player_id: i64) -> Result<Vec<BookedSlot>> {
    let sql = "SELECT id, start_time, end_time FROM matches WHERE player1_id = ?1 OR player2_id = ?1";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id], |row| {
            Ok(BookedSlot {
                match_id: row.get(0)?,
                start: row.get(1)?,
                end: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

/// Write back the mutable fields. The handler resolves the partial-update
/// rules first and passes the final values. Returns false for an unknown id.
pub fn update_match(
    conn: &Connection,
    id: i64,
    start_time: NaiveDateTime,
    end_time: Option<NaiveDateTime>,
    winner_id: Option<i64>,
    table_number: Option<i32>,
) -> Result<bool> {
    let sql = "UPDATE matches SET start_time = ?1, end_time = ?2, winner_id = ?3, table_number = ?4 WHERE id = ?5";

    let changed = conn
        .execute(sql, params![start_time, end_time, winner_id, table_number, id])
        .context("Failed to update match")?;

    Ok(changed > 0)
}

/// Returns false when the id is unknown.
pub fn delete_match(conn: &Connection, id: i64) -> Result<bool> {
    let changed = conn
        .execute("DELETE FROM matches WHERE id = ?1", params![id])
        .context("Failed to delete match")?;

    Ok(changed > 0)
}
