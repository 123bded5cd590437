use super::{flag::ComplFlag, project::Project};
use serde::Serialize;

/// One row of the ticket table, exactly as the store keeps it.
///
/// Date and time cells stay as strings in the sheet formats
/// (`DD/MM/YYYY`, `HH:MM`): the store is a dumb table and rows written
/// by other tools may hold anything. Interpretation happens in
/// `core::sla`, which degrades unparseable cells to a zero duration
/// instead of rejecting the row.
#[derive(Debug, Clone, Serialize)]
pub struct Ticket {
    pub id: String,         // ⇔ tickets.ticket_id (unique, enforced on insert)
    pub date: String,       // ⇔ tickets.date ("DD/MM/YYYY")
    pub scheduled: String,  // ⇔ tickets.scheduled ("HH:MM", may be blank)
    pub arrival: String,    // ⇔ tickets.arrival ("HH:MM")
    pub completion: String, // ⇔ tickets.completion ("HH:MM")
    pub compl_opened: ComplFlag,
    pub compl_id: String, // blank unless compl_opened = YES
    pub analyst: String,
    pub notes: String,
    pub project: Project,
}

impl Ticket {
    /// Column headers in the fixed store order. This order is a contract
    /// shared with the export files.
    pub const COLUMNS: [&'static str; 10] = [
        "ticket_id",
        "date",
        "scheduled",
        "arrival",
        "completion",
        "compl_opened",
        "compl_id",
        "analyst",
        "notes",
        "project",
    ];
}
