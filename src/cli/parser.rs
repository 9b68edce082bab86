use crate::export::ExportFormat;
use crate::models::amenity::Amenities;
use crate::models::user::Role;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for studybook
#[derive(Parser, Debug)]
#[command(
    name = "studybook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Book library study spaces: check availability, reserve rooms and manage the space inventory",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Log in as a student or an administrator
    #[arg(global = true, long = "role", value_enum)]
    pub role: Option<Role>,

    /// Account email
    #[arg(global = true, long = "email")]
    pub email: Option<String>,

    /// Account password
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List configuration keys missing from the file")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing configuration keys with default values")]
        migrate: bool,
    },

    /// Database maintenance (administrators)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log (administrators)
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log in and show the current session
    Whoami,

    /// Spaces view: manage the study space inventory (administrators)
    Spaces {
        #[command(subcommand)]
        action: SpaceAction,
    },

    /// Bookings view: list, check availability, book and cancel
    Bookings {
        #[command(subcommand)]
        action: BookingAction,
    },

    /// Export spaces or bookings (administrators)
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export spaces instead of bookings")]
        spaces: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Replace spaces or bookings with a JSON array (administrators)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Import spaces instead of bookings")]
        spaces: bool,
    },

    /// Create a backup copy of the database (administrators)
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SpaceAction {
    /// List all spaces
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Add a new study space
    Add {
        #[arg(long, help = "Location / display name (must be unique)")]
        location: String,

        #[arg(long, allow_negative_numbers = true)]
        seats: i64,

        #[command(flatten)]
        amenities: AmenityArgs,
    },

    /// Delete a study space
    Del {
        #[arg(long)]
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum BookingAction {
    /// List upcoming bookings (own bookings for students, all for admins)
    List {
        #[arg(long, help = "Show past bookings too")]
        past: bool,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show the availability matrix for a day and hour range
    Avail {
        #[command(flatten)]
        slot: SlotArgs,
    },

    /// Book a space for the whole hour range
    Add {
        #[arg(long, help = "Id of the space to book")]
        space: i64,

        #[arg(long, help = "Email of the user to book for (administrators)")]
        user: Option<String>,

        #[command(flatten)]
        slot: SlotArgs,
    },

    /// Cancel an upcoming booking
    Del {
        #[arg(long)]
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

/// Day, hour range and requirements of an availability query.
#[derive(Args, Debug, Clone)]
pub struct SlotArgs {
    #[arg(long, help = "Day (YYYY-MM-DD, today, tomorrow)")]
    pub day: Option<String>,

    #[arg(long = "from", help = "Start hour (e.g. 9, 14:00, 2PM)")]
    pub from: Option<String>,

    #[arg(long = "to", help = "End hour, exclusive (e.g. 12, 17:00, 5PM)")]
    pub to: Option<String>,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub seats: u32,

    #[command(flatten)]
    pub amenities: AmenityArgs,
}

/// Amenity switches. On a space they mean "offers", on a query "must have".
#[derive(Args, Debug, Clone, Default)]
pub struct AmenityArgs {
    #[arg(long)]
    pub outlets: bool,

    #[arg(long)]
    pub accessible: bool,

    #[arg(long)]
    pub quiet: bool,

    #[arg(long)]
    pub private: bool,

    #[arg(long)]
    pub media: bool,
}

impl From<&AmenityArgs> for Amenities {
    fn from(a: &AmenityArgs) -> Self {
        Amenities {
            outlets: a.outlets,
            accessible: a.accessible,
            quiet: a.quiet,
            private: a.private,
            media: a.media,
        }
    }
}
