pub mod add;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;

use crate::models::{SlaStatus, TicketReport};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::wrap_notes;
use ansi_term::Colour;

/// Print the computed card of a single ticket, used as the confirmation
/// view after add/edit and for single-match ID searches.
pub(crate) fn print_ticket_card(report: &TicketReport) {
    let t = &report.ticket;

    let status = match report.status {
        SlaStatus::Ok => Colour::Green.paint("OK"),
        SlaStatus::Alert => Colour::Red.bold().paint("ALERT"),
        SlaStatus::Resolved => Colour::Green.bold().paint("RESOLVED"),
    };

    println!();
    println!("Ticket {}  [{}]", Colour::Cyan.bold().paint(t.id.as_str()), status);
    println!("  Date:       {}   Project: {}", t.date, t.project.label());
    println!(
        "  Scheduled:  {}   Arrival: {}   Completion: {}",
        colorize_optional(&t.scheduled),
        colorize_optional(&t.arrival),
        colorize_optional(&t.completion),
    );
    println!(
        "  Duration:   {}   SLA breach: {}",
        report.total_hours,
        report.breach.to_db_str()
    );
    println!(
        "  Compl.:     {}   Compl. ID: {}",
        t.compl_opened.to_db_str(),
        colorize_optional(&t.compl_id)
    );
    println!("  Analyst:    {}", colorize_optional(&t.analyst));

    if !t.notes.trim().is_empty() {
        println!("  Notes:");
        for line in wrap_notes(&t.notes, 68) {
            println!("    {}", line);
        }
    }
    println!();
}
