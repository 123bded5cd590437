use crate::cli::commands::print_ticket_card;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{sla, validate};
use crate::errors::{AppError, AppResult};
use crate::models::{ComplFlag, Project};
use crate::session::Session;
use crate::ui::messages::success;

/// Edit an existing ticket. Only the fields the edit form exposes are
/// mutable: completion time, complementary flag/ID, notes and project.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        completion,
        compl,
        compl_id,
        notes,
        project,
    } = &cli.command
    {
        let mut session = Session::open(cfg, cli.password.as_deref())?;

        let needle = id.trim();
        let index = session
            .table
            .iter()
            .position(|t| t.id.trim() == needle)
            .ok_or_else(|| AppError::TicketNotFound(needle.to_string()))?;

        let mut ticket = session.table[index].clone();

        if let Some(done) = completion {
            ticket.completion = done.clone();
        }
        if let Some(code) = compl {
            ticket.compl_opened = ComplFlag::from_code(code)
                .ok_or_else(|| AppError::InvalidFlag(code.to_string()))?;
        }
        if let Some(cid) = compl_id {
            ticket.compl_id = cid.clone();
        }
        if let Some(text) = notes {
            ticket.notes = text.clone();
        }
        if let Some(label) = project {
            ticket.project = Project::from_label(label)
                .ok_or_else(|| AppError::InvalidProject(label.to_string()))?;
        }

        validate::validate_edit(&ticket)?;

        let mut table = session.table.clone();
        table[index] = ticket.clone();
        session.save(table)?;

        session.audit("edit", &ticket.id, "Ticket updated");

        success(format!("Ticket '{}' updated.", ticket.id));
        print_ticket_card(&sla::evaluate_ticket(&ticket));
    }

    Ok(())
}
