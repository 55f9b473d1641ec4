use anyhow::{Context, Result};
use rusqlite::{params, Transaction};

use super::connection::DbConn;
use super::models::EventRow;

const SELECT_COLUMNS: &str =
    "SELECT id, row_order, date, player_name, keeper_name, status, remark, gender FROM game_events";

pub fn insert_event(tx: &Transaction<'_>, row: &EventRow) -> Result<()> {
    let sql = "INSERT INTO game_events (id, row_order, date, player_name, keeper_name, status, remark, gender) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";

    tx.execute(
        sql,
        params![
            row.id,
            row.row_order,
            row.date,
            row.player_name,
            row.keeper_name,
            row.status,
            row.remark,
            row.gender
        ],
    )
    .with_context(|| format!("Failed to insert event {}", row.id))
    .map(|_| ())
}

pub fn delete_all(tx: &Transaction<'_>) -> Result<usize> {
    tx.execute("DELETE FROM game_events", [])
        .context("Failed to clear game_events")
}

fn parse_event_row(row: &rusqlite::Row) -> rusqlite::Result<EventRow> {
    Ok(EventRow {
        id: row.get(0)?,
        row_order: row.get(1)?,
        date: row.get(2)?,
        player_name: row.get(3)?,
        keeper_name: row.get(4)?,
        status: row.get(5)?,
        remark: row.get(6)?,
        gender: row.get(7)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<EventRow>> {
    let sql = format!("{SELECT_COLUMNS} ORDER BY row_order ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_event_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_events(conn: &mut DbConn) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM game_events", [], |row| row.get(0))
        .context("Failed to count events")
}
