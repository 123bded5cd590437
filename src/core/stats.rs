//! Aggregations behind the `dashboard` command.

use crate::models::{SlaStatus, TicketReport};
use crate::utils::formatting::format_hms;
use std::collections::HashMap;

const UNASSIGNED: &str = "Not informed";

#[derive(Debug, Default)]
pub struct SlaSummary {
    pub total: usize,
    pub ok: usize,
    pub alert: usize,
    pub resolved: usize,
    /// Mean duration over rows with a non-zero duration, as `H:MM:SS`.
    pub mean_duration: String,
    /// Open ALERT tickets per analyst, most loaded first.
    pub alerts_by_analyst: Vec<(String, usize)>,
    /// Open ALERT tickets per project, most loaded first.
    pub alerts_by_project: Vec<(String, usize)>,
}

pub fn summarize(reports: &[TicketReport]) -> SlaSummary {
    let mut summary = SlaSummary {
        total: reports.len(),
        mean_duration: format_hms(0),
        ..Default::default()
    };

    let mut valid_secs: Vec<i64> = Vec::new();
    let mut by_analyst: HashMap<String, usize> = HashMap::new();
    let mut by_project: HashMap<String, usize> = HashMap::new();

    for report in reports {
        match report.status {
            SlaStatus::Ok => summary.ok += 1,
            SlaStatus::Alert => summary.alert += 1,
            SlaStatus::Resolved => summary.resolved += 1,
        }

        if report.duration_secs > 0 {
            valid_secs.push(report.duration_secs);
        }

        if report.status == SlaStatus::Alert {
            let analyst = match report.ticket.analyst.trim() {
                "" => UNASSIGNED.to_string(),
                name => name.to_string(),
            };
            *by_analyst.entry(analyst).or_insert(0) += 1;
            *by_project
                .entry(report.ticket.project.label().to_string())
                .or_insert(0) += 1;
        }
    }

    if !valid_secs.is_empty() {
        let mean = valid_secs.iter().sum::<i64>() / valid_secs.len() as i64;
        summary.mean_duration = format_hms(mean);
    }

    summary.alerts_by_analyst = sorted_desc(by_analyst);
    summary.alerts_by_project = sorted_desc(by_project);
    summary
}

fn sorted_desc(map: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = map.into_iter().collect();
    // count descending, name ascending for a stable display
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
