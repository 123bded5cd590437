use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::info;

/// Print the internal audit log, newest entries first.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = &cli.command {
        if *print {
            let mut session = Session::open(cfg, cli.password.as_deref())?;

            let rows = load_log(&mut session.pool)?;

            if rows.is_empty() {
                info("The internal log is empty.");
                return Ok(());
            }

            for (date, operation, message) in rows {
                println!("{}  [{}]  {}", date, operation, message);
            }
        }
    }
    Ok(())
}
