use crate::cli::commands::print_ticket_card;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::sla;
use crate::errors::{AppError, AppResult};
use crate::models::{Project, SlaStatus, TicketReport};
use crate::session::Session;
use crate::ui::messages::{header, info};
use crate::utils::colors::color_for_status;
use crate::utils::table::Table;

/// Show the computed control table.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        alerts_only,
        project,
        analyst,
        id,
    } = &cli.command
    {
        let session = Session::open(cfg, cli.password.as_deref())?;

        let project_filter = match project {
            Some(label) => Some(
                Project::from_label(label)
                    .ok_or_else(|| AppError::InvalidProject(label.to_string()))?,
            ),
            None => None,
        };

        let reports: Vec<TicketReport> = sla::evaluate(&session.table)
            .into_iter()
            .filter(|r| !*alerts_only || r.status == SlaStatus::Alert)
            .filter(|r| project_filter.is_none_or(|p| r.ticket.project == p))
            .filter(|r| match analyst {
                Some(name) => r
                    .ticket
                    .analyst
                    .to_lowercase()
                    .contains(&name.to_lowercase()),
                None => true,
            })
            .filter(|r| match id {
                Some(needle) => r
                    .ticket
                    .id
                    .to_lowercase()
                    .contains(&needle.to_lowercase()),
                None => true,
            })
            .collect();

        if reports.is_empty() {
            info("No tickets to display for the selected view.");
            return Ok(());
        }

        // A single ID-search hit gets the full card, ready for edit.
        if id.is_some() && reports.len() == 1 {
            print_ticket_card(&reports[0]);
            return Ok(());
        }

        header("Ticket control table");
        println!("{}", render_table(&reports));

        let alerts = reports
            .iter()
            .filter(|r| r.status == SlaStatus::Alert)
            .count();
        let resolved = reports
            .iter()
            .filter(|r| r.status == SlaStatus::Resolved)
            .count();
        println!(
            "{} tickets ({} ALERT, {} RESOLVED)",
            reports.len(),
            alerts,
            resolved
        );
    }
    Ok(())
}

fn render_table(reports: &[TicketReport]) -> String {
    let mut table = Table::new(vec![
        "ID", "DATE", "SCHED", "ARRIVAL", "DONE", "COMPL?", "COMPL ID", "ANALYST", "PROJECT",
        "HOURS", "BREACH", "STATUS",
    ]);

    for report in reports {
        let t = &report.ticket;
        table.add_row(
            vec![
                t.id.clone(),
                t.date.clone(),
                t.scheduled.clone(),
                t.arrival.clone(),
                t.completion.clone(),
                t.compl_opened.to_db_str().to_string(),
                t.compl_id.clone(),
                t.analyst.clone(),
                t.project.label().to_string(),
                report.total_hours.clone(),
                report.breach.to_db_str().to_string(),
                report.status.as_str().to_string(),
            ],
            color_for_status(report.status),
        );
    }

    table.render()
}
