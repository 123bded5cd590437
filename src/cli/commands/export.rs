use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::sla;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::{SlaStatus, TicketReport};
use crate::session::Session;

/// Export the (optionally filtered) control table.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        alerts_only,
        force,
    } = &cli.command
    {
        let session = Session::open(cfg, cli.password.as_deref())?;

        let reports: Vec<TicketReport> = sla::evaluate(&session.table)
            .into_iter()
            .filter(|r| !*alerts_only || r.status == SlaStatus::Alert)
            .collect();

        ExportLogic::export(&reports, *format, file, *force)?;

        session.audit(
            "export",
            format.as_str(),
            &format!("Exported {} tickets to {}", reports.len(), file),
        );
    }
    Ok(())
}
