use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchbank
/// CLI application to track daily clock punches and a time-bank balance
#[derive(Parser)]
#[command(
    name = "punchbank",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily clock punches, classify holidays and bridge days, and track a time-bank balance",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Override the date treated as "today" (YYYY-MM-DD; test hook)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Register (or overwrite) the active user identity
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address; the key joining a user to their ledger and bank
        #[arg(long)]
        email: String,
    },

    /// Clear the active user identity (ledger and bank are kept)
    Logout,

    /// Record the next punch of the day (clock-in → lunch-out → lunch-in → clock-out)
    Punch {
        /// Work location: O=On-site, F=Field
        #[arg(long = "pos", help = "Work location: O=On-site, F=Field")]
        pos: Option<String>,

        /// Punch time (HH:MM); defaults to the current time
        #[arg(long = "at", help = "Punch time (HH:MM); defaults to now")]
        at: Option<String>,
    },

    /// Correct or backfill one of today's punches
    Adjust {
        /// Which punch to adjust: in, lunch-out, lunch-in, out
        #[arg(
            long = "kind",
            help = "Punch to adjust: in, lunch-out, lunch-in, out"
        )]
        kind: Option<String>,

        /// Work location: O=On-site, F=Field
        #[arg(long = "pos", help = "Work location: O=On-site, F=Field")]
        pos: Option<String>,

        /// Corrected time (HH:MM)
        #[arg(long = "at", help = "Corrected time (HH:MM)")]
        at: String,
    },

    /// Show the active user, today's summary and the time-bank balance
    Status,

    /// List recorded punches and per-day summaries
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM               → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD            → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY
        /// - YYYY-MM:YYYY-MM
        /// - YYYY-MM-DD:YYYY-MM-DD
        ///
        /// If omitted, the default is the current month.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,
    },

    /// Manage the database (integrity checks, maintenance, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for problems")]
        check: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the punch ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
