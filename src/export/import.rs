//! CSV import: seed the ticket table back from an exported file.

use crate::errors::{AppError, AppResult};
use crate::export::model::TicketExport;
use crate::models::Ticket;
use crate::utils::path::expand_tilde;
use std::collections::HashSet;
use std::path::PathBuf;

/// Read tickets from a CSV file with the export column layout. Derived
/// columns (total_hours, sla_breach), if present, are ignored.
///
/// Field-level date/time validation is intentionally NOT applied here:
/// imported sheets may carry legacy malformed cells, and those rows fall
/// under the calculator's fail-soft policy. What is enforced is the
/// table invariant: every row has an identifier and identifiers are
/// unique within the file.
pub fn read_csv(file: &str) -> AppResult<Vec<Ticket>> {
    let path: PathBuf = expand_tilde(file);

    if !path.is_absolute() {
        return Err(AppError::Import(format!(
            "input file path must be absolute: {file}"
        )));
    }

    let mut rdr = csv::Reader::from_path(&path)
        .map_err(|e| AppError::Import(format!("{}: {e}", path.display())))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<Ticket> = Vec::new();

    for (index, record) in rdr.deserialize::<TicketExport>().enumerate() {
        let line = index + 2; // header is line 1
        let row = record.map_err(|e| AppError::Import(format!("line {line}: {e}")))?;

        let ticket = row.into_ticket();

        if ticket.id.is_empty() {
            return Err(AppError::Import(format!("line {line}: ticket ID is empty")));
        }
        if !seen.insert(ticket.id.clone()) {
            return Err(AppError::Import(format!(
                "line {line}: duplicate ticket ID '{}'",
                ticket.id
            )));
        }

        out.push(ticket);
    }

    Ok(out)
}
