//! Authenticated application state.
//!
//! A `Session` is the only way commands reach the ticket table: it is
//! created by a successful password check, owns the store handle and the
//! in-memory copy of the table, and is dropped when the command ends.
//! There is no global state.

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all, save_all};
use crate::errors::{AppError, AppResult};
use crate::models::Ticket;

pub struct Session {
    pub pool: DbPool,
    pub table: Vec<Ticket>,
}

impl Session {
    /// Open a session: check the shared password, open the store and
    /// load the current table.
    ///
    /// The password comes from `--password` (or the CHAMADOS_PASSWORD
    /// environment variable, which clap folds into the same argument)
    /// and is compared in plaintext against the configured value, as the
    /// original system did.
    pub fn open(cfg: &Config, password: Option<&str>) -> AppResult<Self> {
        let given = password
            .ok_or_else(|| AppError::AccessDenied("password required (use --password)".into()))?;

        if given != cfg.access_password {
            return Err(AppError::AccessDenied("wrong password".into()));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let table = load_all(&mut pool)?;

        Ok(Self { pool, table })
    }

    /// Persist a new version of the table and refresh the in-memory
    /// copy. On failure the in-memory state keeps the previous table.
    pub fn save(&mut self, table: Vec<Ticket>) -> AppResult<()> {
        save_all(&mut self.pool, &table)?;
        self.table = table;
        Ok(())
    }

    /// Best-effort audit-log write; a logging failure never fails the
    /// operation being logged.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            eprintln!("warning: failed to write internal log: {}", e);
        }
    }
}
