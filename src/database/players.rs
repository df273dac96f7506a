use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{Player, PlayerFilter};

const PLAYER_COLUMNS: &str = "id, name, ranking, preferred_cue, profile_picture_url, created_at";

pub fn insert_player(
    conn: &Connection,
    name: &str,
    ranking: i32,
    preferred_cue: Option<&str>,
    profile_picture_url: &str,
) -> Result<Player> {
    let sql = "INSERT INTO players (name, ranking, preferred_cue, profile_picture_url) VALUES (?1, ?2, ?3, ?4) RETURNING id, name, ranking, preferred_cue, profile_picture_url, created_at";

    conn.query_row(
        sql,
        params![name, ranking, preferred_cue, profile_picture_url],
        parse_player_row,
    )
    .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        ranking: row.get(2)?,
        preferred_cue: row.get(3)?,
        profile_picture_url: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Player>> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM players WHERE id = ?1");

    conn.query_row(&sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list(conn: &Connection, filter: &PlayerFilter) -> Result<Vec<Player>> {
    match &filter.name_contains {
        Some(fragment) => {
            let sql = format!(
                "SELECT {PLAYER_COLUMNS} FROM players WHERE name LIKE '%' || ?1 || '%' ORDER BY id"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(params![fragment], parse_player_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        }
        None => {
            let sql = format!("SELECT {PLAYER_COLUMNS} FROM players ORDER BY id");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([], parse_player_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(rows)
        }
    }
}

/// Full replace of the mutable fields. Returns false when the id is unknown.
pub fn update_player(
    conn: &Connection,
    id: i64,
    name: &str,
    ranking: i32,
    preferred_cue: Option<&str>,
    profile_picture_url: &str,
) -> Result<bool> {
    let sql = "UPDATE players SET name = ?1, ranking = ?2, preferred_cue = ?3, profile_picture_url = ?4 WHERE id = ?5";

    let changed = conn
        .execute(sql, params![name, ranking, preferred_cue, profile_picture_url, id])
        .context("Failed to update player")?;

    Ok(changed > 0)
}

/// Returns false when the id is unknown.
pub fn delete_player(conn: &Connection, id: i64) -> Result<bool> {
    let changed = conn
        .execute("DELETE FROM players WHERE id = ?1", params![id])
        .context("Failed to delete player")?;

    Ok(changed > 0)
}
