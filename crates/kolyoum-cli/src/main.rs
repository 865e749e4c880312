mod age;
mod events;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use kolyoum_core::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "kolyoum")]
#[command(about = "kol youm command line utilities")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a profile's age from a birthdate or a stored age
    Age {
        /// Birthdate in YYYY-MM-DD form; takes precedence over --age
        #[arg(long, required_unless_present = "age")]
        birthdate: Option<String>,
        /// Stored age used when no birthdate is given
        #[arg(long)]
        age: Option<i32>,
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List events from the Teskerti feed
    Events {
        /// Only show events in this category (case-insensitive)
        #[arg(long)]
        category: Option<String>,
        /// Print the envelope as JSON instead of a table; --category still applies
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    init_tracing(&kolyoum_core::log_level_from_env());

    dispatch(cli.command, kolyoum_core::load_app_config_from_env).await
}

/// Install the fmt subscriber. `RUST_LOG` wins, then the configured level,
/// then `info` if that level does not parse.
fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run a command. Feed configuration is only loaded, and validated, for the
/// commands that talk to the feed.
async fn dispatch<F>(command: Commands, load_config: F) -> anyhow::Result<()>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    match command {
        Commands::Age {
            birthdate,
            age: stored_age,
            today,
        } => age::run_age(birthdate, stored_age, today),
        Commands::Events { category, json } => {
            let config = load_config()?;
            events::run_events(&config, category.as_deref(), json).await
        }
    }
}
