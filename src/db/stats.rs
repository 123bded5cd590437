use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::parse_date;
use chrono::NaiveDate;
use std::fs;

/// Print database information for `db --info`.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM tickets", [], |row| row.get(0))?;
    println!(
        "{}• Total tickets:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    // Date cells are DD/MM/YYYY text, so the range cannot come from a
    // SQL ORDER BY; parse in memory and skip malformed cells.
    let mut stmt = pool.conn.prepare("SELECT date FROM tickets")?;
    let dates: Vec<NaiveDate> = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .filter_map(|r| r.ok())
        .filter_map(|s| parse_date(&s))
        .collect();

    let first = dates.iter().min();
    let last = dates.iter().max();

    println!("{}• Date range:{}", CYAN, RESET);
    match (first, last) {
        (Some(f), Some(l)) => {
            println!("    from: {}", f.format("%d/%m/%Y"));
            println!("    to:   {}", l.format("%d/%m/%Y"));
        }
        _ => {
            println!("    from: {GREY}--{RESET}");
            println!("    to:   {GREY}--{RESET}");
        }
    }

    let mut stmt = pool.conn.prepare(
        "SELECT project, COUNT(*) FROM tickets GROUP BY project ORDER BY COUNT(*) DESC",
    )?;
    let projects: Vec<(String, i64)> = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?
        .filter_map(|r| r.ok())
        .collect();

    if !projects.is_empty() {
        println!("{}• Tickets per project:{}", CYAN, RESET);
        for (project, n) in projects {
            println!("    {:<16} {}", project, n);
        }
    }

    println!();
    Ok(())
}
