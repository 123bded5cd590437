//! Whole-table load/save over the `tickets` table.
//!
//! The store keeps the spreadsheet contract: `load_all` reads the full
//! range in row order, `save_all` overwrites it from row 1. There is no
//! per-row update path; every mutation goes through read-modify-write of
//! the in-memory table.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{ComplFlag, Project, Ticket};
use regex::Regex;
use rusqlite::{Result, Row, params};
use std::sync::OnceLock;

/// Sheets exported from numeric columns carry a trailing `.0` on the
/// identifier; strip it when loading, as the original sheet loader did.
fn normalize_id(raw: &str) -> String {
    static TRAILING_ZERO: OnceLock<Regex> = OnceLock::new();
    let re = TRAILING_ZERO.get_or_init(|| Regex::new(r"\.0$").unwrap());
    re.replace(raw.trim(), "").to_string()
}

fn map_row(row: &Row) -> Result<Ticket> {
    let id: String = row.get("ticket_id")?;
    let flag: String = row.get("compl_opened")?;
    let project: String = row.get("project")?;

    Ok(Ticket {
        id: normalize_id(&id),
        date: row.get("date")?,
        scheduled: row.get("scheduled")?,
        arrival: row.get("arrival")?,
        completion: row.get("completion")?,
        // lenient on read: the table may have been seeded by other tools
        compl_opened: ComplFlag::from_db_str(&flag).unwrap_or(ComplFlag::No),
        compl_id: row.get("compl_id")?,
        analyst: row.get("analyst")?,
        notes: row.get("notes")?,
        project: Project::from_db_str(&project),
    })
}

/// Load the full ticket table in row order. Rows with a blank identifier
/// are skipped, matching the sheet loader's dropna on the ID column.
pub fn load_all(pool: &mut DbPool) -> AppResult<Vec<Ticket>> {
    let mut stmt = pool.conn.prepare(
        "SELECT ticket_id, date, scheduled, arrival, completion,
                compl_opened, compl_id, analyst, notes, project
         FROM tickets
         ORDER BY row_id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        let t = r?;
        if !t.id.is_empty() {
            out.push(t);
        }
    }
    Ok(out)
}

/// Overwrite the entire table from row 1, in one transaction.
pub fn save_all(pool: &mut DbPool, table: &[Ticket]) -> AppResult<()> {
    let tx = pool.conn.transaction()?;

    tx.execute("DELETE FROM tickets", [])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO tickets (ticket_id, date, scheduled, arrival, completion,
                                  compl_opened, compl_id, analyst, notes, project)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;

        for t in table {
            stmt.execute(params![
                t.id,
                t.date,
                t.scheduled,
                t.arrival,
                t.completion,
                t.compl_opened.to_db_str(),
                t.compl_id,
                t.analyst,
                t.notes,
                t.project.to_db_str(),
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}

/// Rows from the internal audit log, newest first.
pub fn load_log(pool: &mut DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
