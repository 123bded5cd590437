use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure the `tickets` table exists.
///
/// Column order mirrors the sheet contract: identifier, date, scheduled
/// time, arrival time, completion time, complementary-opened flag,
/// complementary id, analyst, notes, project. Date/time columns are
/// free text on purpose: rows imported from older sheets may hold
/// malformed values, and the calculator handles those.
fn create_tickets_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tickets (
            row_id       INTEGER PRIMARY KEY AUTOINCREMENT,
            ticket_id    TEXT NOT NULL,
            date         TEXT NOT NULL DEFAULT '',
            scheduled    TEXT NOT NULL DEFAULT '',
            arrival      TEXT NOT NULL DEFAULT '',
            completion   TEXT NOT NULL DEFAULT '',
            compl_opened TEXT NOT NULL DEFAULT 'NO' CHECK(compl_opened IN ('YES','NO')),
            compl_id     TEXT NOT NULL DEFAULT '',
            analyst      TEXT NOT NULL DEFAULT '',
            notes        TEXT NOT NULL DEFAULT '',
            project      TEXT NOT NULL DEFAULT 'Outros'
        );

        CREATE INDEX IF NOT EXISTS idx_tickets_ticket_id ON tickets(ticket_id);
        "#,
    )?;
    Ok(())
}

/// Ensure the internal `log` audit table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn tickets_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='tickets'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Run all pending schema migrations.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    create_tickets_table(conn)?;
    ensure_log_table(conn)?;

    if !tickets_table_exists(conn)? {
        return Err(AppError::Migration(
            "tickets table missing after migration".to_string(),
        ));
    }

    Ok(())
}
