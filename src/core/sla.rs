//! SLA status calculator.
//!
//! Pure transformation: a slice of raw tickets in, one report per ticket
//! out. No I/O, no side effects, no failures — rows whose date/time
//! cells do not parse degrade to a zero duration instead of aborting the
//! batch, so a single bad row never hides the rest of the table.

use crate::models::{ComplFlag, SlaStatus, Ticket, TicketReport};
use crate::utils::formatting::format_hms;
use crate::utils::time::combine_date_time;

/// Fixed SLA window: a ticket taking strictly more than 4 hours breaches.
pub const SLA_LIMIT_SECS: i64 = 4 * 3600;

/// Compute the derived columns for every row of the table.
pub fn evaluate(tickets: &[Ticket]) -> Vec<TicketReport> {
    tickets.iter().map(evaluate_ticket).collect()
}

/// Compute the derived columns for a single ticket.
pub fn evaluate_ticket(ticket: &Ticket) -> TicketReport {
    let arrived_at = combine_date_time(&ticket.date, &ticket.arrival);
    let completed_at = combine_date_time(&ticket.date, &ticket.completion);

    // completion − arrival, clamped at zero: negative spans and
    // unparseable cells both collapse to "no measurable duration".
    let duration_secs = match (arrived_at, completed_at) {
        (Some(start), Some(end)) => (end - start).num_seconds().max(0),
        _ => 0,
    };

    let breach = if duration_secs > SLA_LIMIT_SECS {
        ComplFlag::Yes
    } else {
        ComplFlag::No
    };

    let status = derive_status(breach, ticket.compl_opened);

    TicketReport {
        ticket: ticket.clone(),
        arrived_at,
        completed_at,
        duration_secs,
        total_hours: format_hms(duration_secs),
        breach,
        status,
    }
}

/// Status lookup on (breach, complementary-opened). OK is the default.
fn derive_status(breach: ComplFlag, compl_opened: ComplFlag) -> SlaStatus {
    match (breach, compl_opened) {
        (ComplFlag::Yes, ComplFlag::No) => SlaStatus::Alert,
        (ComplFlag::Yes, ComplFlag::Yes) => SlaStatus::Resolved,
        (ComplFlag::No, _) => SlaStatus::Ok,
    }
}
