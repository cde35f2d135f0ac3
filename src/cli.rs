//! CLI interface for the journal.
//!
//! Each subcommand is non-interactive: arguments in, text out.
//! Entries are written with `urge log`, read back with `today`, `history`
//! and `stats`, and taken elsewhere with `export`.
//!
//! Anywhere an entry id is expected, a full UUID or an unambiguous prefix works.

mod entry;
mod format;
mod report;
mod timer;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jiff::tz::TimeZone;
use tracing::debug;

use crate::config::Config;
use crate::export;
use crate::journal::Journal;
use crate::model::{Outcome, vocab};
use crate::storage::Storage;

/// Urge: a craving journal.
#[derive(Debug, Parser)]
#[command(name = "urge", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Journal database to use instead of the configured one.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Examples:
  urge log --intensity 7 --factor "Work stress" --location Workplace --outcome not-acted --coping "Brief walk"
  urge log -i 8 --outcome smoked --quantity 2 --at 14:30 --notes "after the call"
  urge today
  urge history --search coffee
  urge stats --days 14
  urge export --out craving-records.csv
  urge timer"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a craving. Prints the new entry's ID.
    Log(entry::LogArgs),

    /// Remove an entry by ID or ID prefix.
    Remove {
        /// Entry ID: full UUID or unambiguous prefix (e.g. `a3b`).
        id: String,
    },

    /// Today's counts, averages, and entries.
    Today,

    /// All entries grouped by day, newest first.
    History {
        /// Only show entries whose factors, location, mood or notes contain this text.
        #[arg(long, short)]
        search: Option<String>,
    },

    /// Rolling statistics, the daily intensity chart, and peak hours.
    Stats {
        /// Rolling window length in days (defaults to `window-days` from config).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        days: Option<u32>,
    },

    /// Export every entry as CSV.
    ///
    /// Written to `--out` (if given) or stdout.
    Export {
        /// Write the CSV to this file instead of stdout.
        /// A directory gets a `craving-records.csv` inside it.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Run the urge delay timer.
    Timer {
        /// Countdown length in seconds.
        #[arg(long, default_value_t = crate::timer::DEFAULT_SECONDS)]
        seconds: u32,
    },

    /// List the suggested factors, locations, moods and coping methods.
    Vocab,
}

/// CLI-facing outcome, mapped to the domain `Outcome`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutcomeArg {
    /// The urge passed without smoking.
    NotActed,
    /// Smoked.
    Smoked,
}

impl OutcomeArg {
    fn to_domain(self) -> Outcome {
        match self {
            Self::NotActed => Outcome::NotActed,
            Self::Smoked => Outcome::Smoked,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();
    let tz = config.time_zone()?;

    // The timer and vocabulary never touch the journal.
    match cli.command {
        Command::Timer { seconds } => return timer::cmd_timer(seconds),
        Command::Vocab => {
            cmd_vocab();
            return Ok(());
        }
        _ => {}
    }

    let path = cli
        .store
        .or_else(|| config.store.clone())
        .or_else(Storage::default_path)
        .ok_or("could not determine home directory")?;
    debug!(path = %path.display(), "opening journal");
    let storage = Storage::open(&path)
        .map_err(|e| format!("failed to open journal at {}: {e}", path.display()))?;
    let mut journal = Journal::open(&storage);
    journal.subscribe(|events| debug!(count = events.len(), "journal saved"));

    dispatch(cli.command, config, &tz, &mut journal)
}

fn dispatch(
    command: Command,
    config: &Config,
    tz: &TimeZone,
    journal: &mut Journal<&Storage>,
) -> Result<(), String> {
    match command {
        Command::Log(args) => entry::cmd_log(journal, tz, args),
        Command::Remove { id } => entry::cmd_remove(journal, &id),
        Command::Today => {
            report::cmd_today(journal, tz);
            Ok(())
        }
        Command::History { search } => {
            report::cmd_history(journal, tz, config.window_days, search.as_deref());
            Ok(())
        }
        Command::Stats { days } => {
            report::cmd_stats(journal, tz, days.unwrap_or(config.window_days));
            Ok(())
        }
        Command::Export { out } => cmd_export(journal, out),
        Command::Timer { .. } | Command::Vocab => Ok(()),
    }
}

fn cmd_export(journal: &Journal<&Storage>, out: Option<PathBuf>) -> Result<(), String> {
    let csv = export::to_csv(journal.events());

    match out {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(export::DEFAULT_FILE_NAME)
            } else {
                path
            };
            fs::write(&path, &csv)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!(
                "Exported {} entries → {}",
                journal.events().len(),
                path.display()
            );
        }
        None => {
            println!("{csv}");
        }
    }

    Ok(())
}

fn cmd_vocab() {
    let sections = [
        ("Factors", vocab::FACTORS),
        ("Locations", vocab::LOCATIONS),
        ("Moods", vocab::MOODS),
        ("Coping methods", vocab::COPING_METHODS),
    ];
    for (i, (title, values)) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{title}:");
        for value in *values {
            println!("  {value}");
        }
    }
}
