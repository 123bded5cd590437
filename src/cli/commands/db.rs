use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::session::Session;

/// Handle the `db` subcommand.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info } = &cli.command {
        if *info {
            let mut session = Session::open(cfg, cli.password.as_deref())?;
            print_db_info(&mut session.pool, &cfg.database)?;
        }
    }
    Ok(())
}
