mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use wushu_core::CalendarSession;
use wushu_core::config::WushuConfig;
use wushu_core::event::Recurrence;
use wushu_core::storage::FileStorage;

#[derive(Parser)]
#[command(name = "wushu")]
#[command(about = "Personal event calendar: browse months, add and remove events")]
struct Cli {
    /// Read and write events in this directory instead of the configured one
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid and the selected day's events
    Month {
        /// Months to move from the current one (e.g. -1 for last month)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        shift: i32,

        /// Day to select (YYYY-MM-DD)
        #[arg(long)]
        select: Option<String>,
    },
    /// List the events on a day (defaults to today)
    Day { date: Option<String> },
    /// Add an event
    Add {
        title: Option<String>,

        /// Anchor day (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Time of day (e.g. "18:30"); leave out for all-day events
        #[arg(short, long)]
        time: Option<String>,

        /// Duration in minutes
        #[arg(long)]
        duration: Option<String>,

        #[arg(short, long, value_enum, default_value_t = RecurrenceArg::None)]
        recurrence: RecurrenceArg,

        /// Last day a recurring event may occur on (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,
    },
    /// Remove an event by id
    Remove { id: String },
    /// Browse the calendar interactively
    Browse,
    /// Show config and storage paths
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum RecurrenceArg {
    None,
    Weekly,
    Monthly,
}

impl From<RecurrenceArg> for Recurrence {
    fn from(arg: RecurrenceArg) -> Self {
        match arg {
            RecurrenceArg::None => Recurrence::None,
            RecurrenceArg::Weekly => Recurrence::Weekly,
            RecurrenceArg::Monthly => Recurrence::Monthly,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.data_dir)?;

    match cli.command {
        Commands::Month { shift, select } => {
            commands::month::run(open_session(&config), shift, select)
        }
        Commands::Day { date } => commands::day::run(open_session(&config), date),
        Commands::Add {
            title,
            date,
            time,
            duration,
            recurrence,
            until,
        } => commands::add::run(
            open_session(&config),
            title,
            date,
            time,
            duration,
            recurrence.into(),
            until,
        ),
        Commands::Remove { id } => commands::remove::run(open_session(&config), &id),
        Commands::Browse => commands::browse::run(open_session(&config)),
        Commands::Config => commands::config::run(&config),
    }
}

fn load_config(data_dir: Option<PathBuf>) -> Result<WushuConfig> {
    let mut config = WushuConfig::load()?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(storage = %config.storage_path().display(), "Using event storage");
    Ok(config)
}

fn open_session(config: &WushuConfig) -> CalendarSession<FileStorage> {
    CalendarSession::open(config.storage())
}
