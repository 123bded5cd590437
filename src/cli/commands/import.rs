use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::import::read_csv;
use crate::session::Session;
use crate::ui::messages::{success, warning};
use std::io::{self, Write};

/// Replace the ticket table with the contents of a CSV file.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, force } = &cli.command {
        let mut session = Session::open(cfg, cli.password.as_deref())?;

        let incoming = read_csv(file)?;

        // Replacing a non-empty table loses whatever is not in the file.
        if !session.table.is_empty() && !force {
            warning(format!(
                "The table currently holds {} tickets; import will replace them all.",
                session.table.len()
            ));
            print!("Continue? [y/N]: ");
            io::stdout().flush().ok();

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            let ans = answer.trim().to_ascii_lowercase();
            if ans != "y" && ans != "yes" {
                return Err(AppError::Import("cancelled by operator".to_string()));
            }
        }

        let count = incoming.len();
        session.save(incoming)?;

        session.audit("import", file, &format!("Imported {} tickets", count));

        success(format!("Imported {} tickets from {}.", count, file));
    }
    Ok(())
}
