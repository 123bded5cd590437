use crate::cli::commands::print_ticket_card;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{sla, validate};
use crate::errors::{AppError, AppResult};
use crate::models::{ComplFlag, Project, Ticket};
use crate::session::Session;
use crate::ui::messages::success;
use crate::utils::time::today_str;

/// Register a new ticket.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        id,
        date,
        scheduled,
        arrival,
        completion,
        compl,
        compl_id,
        analyst,
        notes,
        project,
    } = &cli.command
    {
        //
        // 1. Resolve the complementary flag (default NO)
        //
        let compl_opened = match compl {
            Some(code) => ComplFlag::from_code(code)
                .ok_or_else(|| AppError::InvalidFlag(code.to_string()))?,
            None => ComplFlag::No,
        };

        //
        // 2. Resolve the project: explicit label must be valid, the
        //    configured default is taken as-is (lenient, like the sheet)
        //
        let project_final = match project {
            Some(label) => Project::from_label(label)
                .ok_or_else(|| AppError::InvalidProject(label.to_string()))?,
            None => Project::from_db_str(&cfg.default_project),
        };

        //
        // 3. Assemble the record (date defaults to today)
        //
        let ticket = Ticket {
            id: id.trim().to_string(),
            date: date.clone().unwrap_or_else(today_str),
            scheduled: scheduled.clone().unwrap_or_default(),
            arrival: arrival.clone().unwrap_or_default(),
            completion: completion.clone().unwrap_or_default(),
            compl_opened,
            compl_id: compl_id.clone().unwrap_or_default(),
            analyst: analyst.clone().unwrap_or_default(),
            notes: notes.clone().unwrap_or_default(),
            project: project_final,
        };

        //
        // 4. Open the session and validate against the current table
        //
        let mut session = Session::open(cfg, cli.password.as_deref())?;

        validate::validate_new(&session.table, &ticket)?;

        //
        // 5. Append and write the table back
        //
        let mut table = session.table.clone();
        table.push(ticket.clone());
        session.save(table)?;

        session.audit("add", &ticket.id, "Ticket registered");

        success(format!("Ticket '{}' registered.", ticket.id));
        print_ticket_card(&sla::evaluate_ticket(&ticket));
    }

    Ok(())
}
