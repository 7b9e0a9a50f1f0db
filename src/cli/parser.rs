use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "An employee punch clock: record IN/LUNCH/OUT events and track working hours against schedules",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Act as this user (falls back to the configured default user)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        cmd: UserCommands,
    },

    /// Record a punch for the active user
    Punch {
        /// Punch kind: in, lunch-out, lunch-in, out
        kind: String,
    },

    /// Show today's dashboard (punches, working hours, status)
    Dashboard {
        #[arg(long, help = "Print the snapshot as JSON")]
        json: bool,
    },

    /// Show punch history grouped per day
    History {
        #[arg(long, help = "Range start (YYYY-MM-DD, default: 7 days ago)")]
        from: Option<String>,

        #[arg(long, help = "Range end (YYYY-MM-DD, default: today)")]
        to: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long = "page-size", default_value_t = 10)]
        page_size: u32,

        #[arg(long, help = "Print history as JSON")]
        json: bool,
    },

    /// Manage work schedules
    Schedule {
        #[command(subcommand)]
        cmd: ScheduleCommands,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Add { name: String },

    /// List registered users
    List,
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Create a schedule for a date (omitted times use the 08:00-17:00 preset)
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long = "start", help = "Work start (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "Work end (HH:MM)")]
        end: Option<String>,

        #[arg(long = "lunch-start", help = "Lunch start (HH:MM)")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", help = "Lunch end (HH:MM)")]
        lunch_end: Option<String>,
    },

    /// Edit an existing schedule (unset fields keep their value)
    Edit {
        /// Schedule id
        id: String,

        #[arg(long = "start", help = "Work start (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "Work end (HH:MM)")]
        end: Option<String>,

        #[arg(long = "lunch-start", help = "Lunch start (HH:MM)")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", help = "Lunch end (HH:MM)")]
        lunch_end: Option<String>,
    },

    /// Delete a schedule by id
    Del { id: String },

    /// List schedules, newest first
    List {
        #[arg(long, help = "Range start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long, help = "Range end (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long, help = "List schedules of all users")]
        all: bool,
    },

    /// Create schedules in bulk from a JSON file
    Bulk {
        /// JSON file: an array of {user_id, date, start_time, end_time, lunch_start?, lunch_end?}
        file: String,
    },
}
