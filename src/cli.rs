//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use tomctl::output::OutputMode;

/// tomctl - Target Observation Manager client
#[derive(Parser, Debug)]
#[command(
    name = "tomctl",
    version,
    about = "Target Observation Manager client",
    long_about = "Manage targets and observations on a Target Observation Manager.\n\n\
                  Coordinates may be given as decimal degrees, H:M:S / D:M:S,\n\
                  12h34m56s / -12d30m00s, or whitespace-separated triplets."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert coordinates between notations (offline)
    Coords {
        #[command(subcommand)]
        action: CoordsAction,
    },

    /// Sign in and store the session
    Login {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password (read from TOM_PASSWORD when omitted)
        #[arg(short, long, env = "TOM_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the stored session
    Whoami,

    /// Send an arbitrary request through the client
    Request {
        /// HTTP method: GET, POST, PUT, PATCH, DELETE
        method: String,

        /// Path relative to the API base URL
        path: String,

        /// JSON body
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Manage targets
    Target {
        #[command(subcommand)]
        action: TargetAction,
    },

    /// Request and track observations
    Observation {
        #[command(subcommand)]
        action: ObservationAction,
    },

    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum CoordsAction {
    /// Parse a right ascension into degrees
    Ra {
        /// Right ascension (e.g. 12:30:49.42, 12h30m49.42s, 187.7059)
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Parse a declination into degrees
    Dec {
        /// Declination (e.g. -12:30:00, +12d30m00s, -12.5)
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Parse "RA DEC" on one line
    Pair {
        /// Coordinate pair (e.g. "12:30:49.42 +12:23:28.0")
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Render degrees as sexagesimal
    Format {
        /// Decimal degrees
        #[arg(allow_hyphen_values = true)]
        degrees: f64,

        /// Decimal places for the seconds field (0-15)
        #[arg(
            short,
            long,
            default_value_t = 3,
            value_parser = clap::value_parser!(u8).range(0..=15)
        )]
        places: u8,

        /// Render as right ascension (hours)
        #[arg(long, conflicts_with = "dec")]
        ra: bool,

        /// Render as declination (explicit sign)
        #[arg(long)]
        dec: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TargetAction {
    /// List targets
    List,

    /// Show one target
    Show {
        /// Target ID
        id: u64,
    },

    /// Register a target
    Create {
        /// Target name
        #[arg(short, long)]
        name: String,

        /// Right ascension
        #[arg(long, allow_hyphen_values = true)]
        ra: String,

        /// Declination
        #[arg(long, allow_hyphen_values = true)]
        dec: String,

        /// Redshift
        #[arg(long)]
        redshift: Option<f64>,

        /// Notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Change a target's coordinates
    Move {
        /// Target ID
        id: u64,

        /// New right ascension
        #[arg(long, allow_hyphen_values = true)]
        ra: String,

        /// New declination
        #[arg(long, allow_hyphen_values = true)]
        dec: String,
    },

    /// Delete a target
    Remove {
        /// Target ID
        id: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ObservationAction {
    /// List observations
    List {
        /// Filter by status: prep, pending, in_progress, done, expired, denied, postponed
        #[arg(short, long)]
        status: Option<String>,

        /// Hide observations that are done, expired or denied
        #[arg(long)]
        open: bool,
    },

    /// Show one observation
    Show {
        /// Observation ID
        id: u64,
    },

    /// Request an observation of one or more targets
    Create {
        /// Observatory ID
        #[arg(short, long)]
        observatory: u64,

        /// Target ID (repeat for several)
        #[arg(short, long = "target", required = true)]
        targets: Vec<u64>,

        /// Window start (YYYY-MM-DD, "YYYY-MM-DD HH:MM:SS" or RFC 3339, UTC)
        #[arg(long)]
        start: String,

        /// Window end
        #[arg(long)]
        end: String,

        /// Priority: high, medium, low, too
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// Name (the backend picks one when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Initial status (the backend starts at prep)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Move an observation to another status
    Status {
        /// Observation ID
        id: u64,

        /// New status: prep, pending, in_progress, done, expired, denied, postponed
        status: String,
    },

    /// Delete an observation
    Remove {
        /// Observation ID
        id: u64,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Change one setting in the config file
    Set {
        /// Setting, e.g. api.base_url, api.timeout_secs, retry.max_retries
        key: String,

        /// New value
        value: String,
    },
}

/// Run the CLI
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Coords { action }) => commands::coords_cmd(action, output_mode),
        Some(Command::Login { username, password }) => {
            commands::login(&username, &password, output_mode).await
        },
        Some(Command::Logout) => commands::logout(output_mode),
        Some(Command::Whoami) => commands::whoami(output_mode),
        Some(Command::Request { method, path, data }) => {
            commands::request(&method, &path, data.as_deref(), output_mode).await
        },
        Some(Command::Target { action }) => commands::target_cmd(action, output_mode).await,
        Some(Command::Observation { action }) => {
            commands::observation_cmd(action, output_mode).await
        },
        Some(Command::Config { action }) => commands::config_cmd(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tomctl::VERSION
                    })
                );
            } else {
                println!("tomctl v{}", tomctl::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": tomctl::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tomctl v{}", tomctl::VERSION);
                println!("\nRun 'tomctl --help' for usage");
                println!("Run 'tomctl login -u <username>' to get started");
            }
            Ok(())
        },
    }
}
