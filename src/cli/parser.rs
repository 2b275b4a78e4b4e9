use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timer
/// CLI application to time activities with SQLite
#[derive(Parser)]
#[command(
    name = "timer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Times your activities: start a session, stop it with Ctrl-C, keep the intervals in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Use this database instead of the one named in the side-record
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Side-record file naming the active database (default: .env)
    #[arg(global = true, long = "record")]
    pub record: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and record its location
    Init {
        /// Database file to create
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        location: String,

        #[arg(
            short = 'o',
            long = "overwrite",
            help = "Replace an existing database and side-record"
        )]
        overwrite: bool,
    },

    /// Start timing an activity; stop with Ctrl-C
    Start {
        /// Activity name
        activity: String,

        #[arg(short = 'n', long = "new", help = "Add the activity if it does not exist yet")]
        new: bool,
    },

    /// List the stored activities
    Activities,

    /// List the stored time intervals
    List {
        #[arg(long, short, help = "Only intervals of this activity")]
        activity: Option<String>,

        #[arg(long = "open", help = "Only intervals that were never stopped")]
        open: bool,

        #[arg(long = "json", help = "Print the rows as JSON")]
        json: bool,
    },

    /// Inspect the database (integrity check, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table (default)")]
        print: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
