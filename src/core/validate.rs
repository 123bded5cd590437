//! Insert/edit validation for ticket records.
//!
//! Unlike the computed columns, input validation is fail-fast: a record
//! that is missing required fields, reuses an identifier or violates the
//! complementary-ticket rule is rejected before anything is written.

use crate::errors::{AppError, AppResult};
use crate::models::Ticket;
use crate::utils::time::{require_date, require_time};

/// Validate a record about to be inserted into `table`.
pub fn validate_new(table: &[Ticket], ticket: &Ticket) -> AppResult<()> {
    if ticket.id.trim().is_empty() {
        return Err(AppError::Validation("ticket ID is required".into()));
    }

    let id = ticket.id.trim();
    if table.iter().any(|t| t.id.trim() == id) {
        return Err(AppError::DuplicateTicket(id.to_string()));
    }

    require_fields(ticket)?;
    require_compl_id(ticket)
}

/// Validate a record after an edit. The identifier already exists, so
/// only field-level rules apply.
pub fn validate_edit(ticket: &Ticket) -> AppResult<()> {
    require_fields(ticket)?;
    require_compl_id(ticket)
}

fn require_fields(ticket: &Ticket) -> AppResult<()> {
    require_date(&ticket.date)?;

    if ticket.arrival.trim().is_empty() {
        return Err(AppError::Validation("arrival time is required".into()));
    }
    require_time(&ticket.arrival)?;

    if ticket.completion.trim().is_empty() {
        return Err(AppError::Validation("completion time is required".into()));
    }
    require_time(&ticket.completion)?;

    // scheduled time is optional, but when present it must parse
    if !ticket.scheduled.trim().is_empty() {
        require_time(&ticket.scheduled)?;
    }

    Ok(())
}

/// Business rule: a YES in "complementary opened?" needs the
/// complementary ticket ID filled in.
fn require_compl_id(ticket: &Ticket) -> AppResult<()> {
    if ticket.compl_opened.is_yes() && ticket.compl_id.trim().is_empty() {
        return Err(AppError::Validation(
            "complementary ticket ID is required when the complementary flag is YES".into(),
        ));
    }
    Ok(())
}
