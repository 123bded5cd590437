use serde::Serialize;

/// Visual SLA classification of a ticket.
///
/// - `Ok`       → within the SLA window
/// - `Alert`    → SLA breached and no complementary ticket opened yet
/// - `Resolved` → SLA breached but a complementary ticket covers it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlaStatus {
    Ok,
    Alert,
    Resolved,
}

impl SlaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlaStatus::Ok => "OK",
            SlaStatus::Alert => "ALERT",
            SlaStatus::Resolved => "RESOLVED",
        }
    }
}
