use crate::models::{ComplFlag, Project, Ticket, TicketReport};
use serde::{Deserialize, Serialize};

/// Flat row for export files.
///
/// Carries the ten raw columns plus the human-readable duration and the
/// breach flag. The visual status and the parsed timestamps are
/// excluded by contract: they are display-only and recomputed on load,
/// so files round-trip through `import` without drift.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TicketExport {
    pub ticket_id: String,
    pub date: String,
    pub scheduled: String,
    pub arrival: String,
    pub completion: String,
    pub compl_opened: String,
    pub compl_id: String,
    pub analyst: String,
    pub notes: String,
    pub project: String,
    // derived columns: absent in hand-made import files
    #[serde(default)]
    pub total_hours: String,
    #[serde(default)]
    pub sla_breach: String,
}

impl TicketExport {
    pub fn from_report(report: &TicketReport) -> Self {
        let t = &report.ticket;
        Self {
            ticket_id: t.id.clone(),
            date: t.date.clone(),
            scheduled: t.scheduled.clone(),
            arrival: t.arrival.clone(),
            completion: t.completion.clone(),
            compl_opened: t.compl_opened.to_db_str().to_string(),
            compl_id: t.compl_id.clone(),
            analyst: t.analyst.clone(),
            notes: t.notes.clone(),
            project: t.project.to_db_str().to_string(),
            total_hours: report.total_hours.clone(),
            sla_breach: report.breach.to_db_str().to_string(),
        }
    }

    /// Raw columns back into a ticket; derived columns are dropped.
    /// Lenient like the store loader: unknown flags default to NO,
    /// unknown project labels collapse into Outros.
    pub fn into_ticket(self) -> Ticket {
        Ticket {
            id: self.ticket_id.trim().to_string(),
            date: self.date,
            scheduled: self.scheduled,
            arrival: self.arrival,
            completion: self.completion,
            compl_opened: ComplFlag::from_db_str(&self.compl_opened).unwrap_or(ComplFlag::No),
            compl_id: self.compl_id,
            analyst: self.analyst,
            notes: self.notes,
            project: Project::from_db_str(&self.project),
        }
    }
}

/// Header row for CSV / XLSX: the raw column contract plus the two
/// derived columns that are part of the export format.
pub(crate) fn get_headers() -> Vec<&'static str> {
    Ticket::COLUMNS
        .iter()
        .copied()
        .chain(["total_hours", "sla_breach"])
        .collect()
}

pub(crate) fn ticket_to_row(t: &TicketExport) -> Vec<String> {
    vec![
        t.ticket_id.clone(),
        t.date.clone(),
        t.scheduled.clone(),
        t.arrival.clone(),
        t.completion.clone(),
        t.compl_opened.clone(),
        t.compl_id.clone(),
        t.analyst.clone(),
        t.notes.clone(),
        t.project.clone(),
        t.total_hours.clone(),
        t.sla_breach.clone(),
    ]
}
