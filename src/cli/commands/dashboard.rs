use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{sla, stats};
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{header, info};
use crate::utils::formatting::format_hms;
use crate::utils::table::Table;
use ansi_term::Colour;

/// SLA performance summary over the whole table.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard = &cli.command {
        let session = Session::open(cfg, cli.password.as_deref())?;

        let reports = sla::evaluate(&session.table);
        let summary = stats::summarize(&reports);

        header("SLA performance (4-hour window)");

        if summary.total == 0 {
            info("No tickets registered yet.");
            return Ok(());
        }

        println!(
            "  Total tickets:     {}",
            Colour::Cyan.bold().paint(summary.total.to_string())
        );
        println!(
            "  Mean resolution:   {}  (SLA: {})",
            Colour::Cyan.bold().paint(summary.mean_duration.as_str()),
            format_hms(sla::SLA_LIMIT_SECS)
        );
        println!(
            "  Within SLA (OK):   {}",
            Colour::Green.paint(summary.ok.to_string())
        );
        println!(
            "  ALERT (breached):  {}",
            Colour::Red.bold().paint(summary.alert.to_string())
        );
        println!(
            "  RESOLVED (compl.): {}",
            Colour::Green.bold().paint(summary.resolved.to_string())
        );

        if !summary.alerts_by_analyst.is_empty() {
            header("Open alerts by analyst");
            println!("{}", breakdown_table("ANALYST", &summary.alerts_by_analyst));
        }

        if !summary.alerts_by_project.is_empty() {
            header("Open alerts by project");
            println!("{}", breakdown_table("PROJECT", &summary.alerts_by_project));
        }
    }
    Ok(())
}

fn breakdown_table(label: &str, entries: &[(String, usize)]) -> String {
    let mut table = Table::new(vec![label, "ALERTS"]);
    for (name, count) in entries {
        table.add_row(vec![name.clone(), count.to_string()], None);
    }
    table.render()
}
