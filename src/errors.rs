//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date '{0}' (expected DD/MM/YYYY)")]
    InvalidDate(String),

    #[error("Invalid time '{0}' (expected HH:MM)")]
    InvalidTime(String),

    #[error("Unknown project '{0}'")]
    InvalidProject(String),

    #[error("Invalid flag '{0}' (expected YES or NO)")]
    InvalidFlag(String),

    // ---------------------------
    // Business rules
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Ticket '{0}' already exists in the table")]
    DuplicateTicket(String),

    #[error("No ticket found with ID '{0}'")]
    TicketNotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),
}

pub type AppResult<T> = Result<T, AppError>;
