use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (with the default shared password)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load()?;
    let db_path = match &cli.db {
        Some(custom) => custom.clone(),
        None => cfg.database.clone(),
    };

    println!("Initializing chamados…");
    println!("Config file : {}", path.display());
    println!("Database    : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("Database initialized at {}", &db_path);

    // non-blocking internal log
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "database",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("warning: failed to write internal log: {}", e);
    }

    println!("chamados initialization completed.");
    println!("Remember to change the access password in the config file.");
    Ok(())
}
