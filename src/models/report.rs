use super::{flag::ComplFlag, status::SlaStatus, ticket::Ticket};
use chrono::NaiveDateTime;

/// A ticket augmented with the derived SLA columns.
///
/// Derived fields are recomputed on every read and never written back to
/// the store.
#[derive(Debug, Clone)]
pub struct TicketReport {
    pub ticket: Ticket,
    pub arrived_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    /// Elapsed seconds between arrival and completion, clamped at zero.
    pub duration_secs: i64,
    /// Human-readable `H:MM:SS` rendering of the duration.
    pub total_hours: String,
    /// YES when the duration exceeds the SLA threshold.
    pub breach: ComplFlag,
    pub status: SlaStatus,
}
