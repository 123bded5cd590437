use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for chamados
/// CLI application to track service tickets and SLA compliance with SQLite
#[derive(Parser)]
#[command(
    name = "chamados",
    version = env!("CARGO_PKG_VERSION"),
    about = "Register service tickets and track 4-hour SLA compliance from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Shared access password (falls back to $CHAMADOS_PASSWORD)
    #[arg(
        global = true,
        long = "password",
        env = "CHAMADOS_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Register a new ticket
    Add {
        /// Ticket ID (unique across the table)
        id: String,

        /// Ticket date (DD/MM/YYYY, defaults to today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Scheduled time (HH:MM)
        #[arg(long = "sched", help = "Scheduled time (HH:MM)")]
        scheduled: Option<String>,

        /// Technician arrival time (HH:MM)
        #[arg(long = "arrival", help = "Arrival time (HH:MM)")]
        arrival: Option<String>,

        /// Completion time (HH:MM)
        #[arg(long = "done", help = "Completion time (HH:MM)")]
        completion: Option<String>,

        /// Complementary ticket opened? (YES/NO, default NO)
        #[arg(long = "compl", help = "Complementary ticket opened? (YES/NO)")]
        compl: Option<String>,

        /// Complementary ticket ID (required when --compl YES)
        #[arg(long = "compl-id", help = "Complementary ticket ID")]
        compl_id: Option<String>,

        /// Backoffice analyst name
        #[arg(long = "analyst", help = "Backoffice analyst name")]
        analyst: Option<String>,

        /// Free-text notes
        #[arg(long = "notes", help = "Free-text notes")]
        notes: Option<String>,

        /// Project (Ambev, Saque e Pague, Tokio, Rumo, Outros)
        #[arg(long = "project", help = "Project the ticket belongs to")]
        project: Option<String>,
    },

    /// Edit an existing ticket
    Edit {
        /// Ticket ID to edit
        id: String,

        /// New completion time (HH:MM)
        #[arg(long = "done", help = "New completion time (HH:MM)")]
        completion: Option<String>,

        /// Complementary ticket opened? (YES/NO)
        #[arg(long = "compl", help = "Complementary ticket opened? (YES/NO)")]
        compl: Option<String>,

        /// Complementary ticket ID
        #[arg(long = "compl-id", help = "New complementary ticket ID")]
        compl_id: Option<String>,

        /// Replace the notes text
        #[arg(long = "notes", help = "New notes text")]
        notes: Option<String>,

        /// Move the ticket to another project
        #[arg(long = "project", help = "New project")]
        project: Option<String>,
    },

    /// Show the computed control table
    List {
        /// Show only tickets in ALERT status
        #[arg(long = "alerts", help = "Show only tickets in ALERT status")]
        alerts_only: bool,

        /// Filter by project label
        #[arg(long, help = "Filter by project")]
        project: Option<String>,

        /// Filter by analyst name (substring, case-insensitive)
        #[arg(long, help = "Filter by analyst name")]
        analyst: Option<String>,

        /// Search by ticket ID (substring); a single match prints the full card
        #[arg(long = "id", help = "Search by ticket ID substring")]
        id: Option<String>,
    },

    /// SLA performance summary
    Dashboard,

    /// Export the control table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export only tickets in ALERT status
        #[arg(long = "alerts", help = "Export only tickets in ALERT status")]
        alerts_only: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace the ticket table from a CSV file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Replace a non-empty table without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show database information
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
