use checkins::{CheckIn, CheckInLog};
use clap::Parser;
use cli::{Cli, Command, EntryCommand};
use color_eyre::eyre::{Result, WrapErr};
use entries::{EntryLog, JournalEntry};
use mood::{affirmation_for, coping_notice};
use rand::{SeedableRng, rngs::StdRng};
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod checkins;
mod cli;
mod content;
mod entries;
mod error;
mod mood;
mod store;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Entry { entry_command } => {
            let mut journal = EntryLog::open(cli.dir.join(entries::FILE_NAME))
                .wrap_err("Failed to open journal")?;

            match entry_command {
                EntryCommand::Add { mood, text } => {
                    journal
                        .push(JournalEntry::new(mood.as_str(), text))
                        .wrap_err("Failed to save journal")?;

                    println!("Your entry has been saved!");

                    let affirmation = match cli.seed {
                        Some(seed) => affirmation_for(&mood, &mut StdRng::seed_from_u64(seed)),
                        None => affirmation_for(&mood, &mut rand::rng()),
                    };
                    println!("{affirmation}");

                    if let Some(notice) = coping_notice(&mood) {
                        println!("{notice}");
                    }

                    record_checkin(&cli.dir, mood);
                }
                EntryCommand::Remove { number } => {
                    let removed = journal
                        .remove(number as usize - 1)
                        .wrap_err("Failed to remove entry")?;

                    println!("Entry {number} ({}) has been deleted.", removed.mood);
                }
                EntryCommand::List => {
                    println!("{}\n", content::BANNER);
                    println!("Previous Entries");

                    if journal.is_empty() {
                        println!("\nNo entries yet.");
                    }

                    for (index, entry) in journal.entries().iter().enumerate() {
                        println!(
                            "\nEntry {}\nMood: {}\n{}\n---",
                            index + 1,
                            entry.mood,
                            entry.journal_entry
                        );
                    }
                }
            }
        }
        Command::Log => {
            let log = CheckInLog::open(cli.dir.join(checkins::FILE_NAME))
                .wrap_err("Failed to open mood log")?;

            if log.checkins().is_empty() {
                println!("No check-ins yet.");
            }

            for checkin in log.checkins() {
                let at = checkin
                    .at
                    .format(&Rfc3339)
                    .wrap_err("Failed to format check-in time")?;

                println!("{at}\t{}", checkin.mood);
            }
        }
        Command::Resources => print!("{}", content::RESOURCES.render()),
        Command::Habits => print!("{}", content::HABITS.render()),
    }

    Ok(())
}

/// The entry is already saved by the time this runs, so a failure here is
/// reported without failing the command.
fn record_checkin(dir: &Path, mood: String) {
    let result = CheckInLog::open(dir.join(checkins::FILE_NAME))
        .and_then(|mut log| log.record(CheckIn::now(mood)));

    if let Err(err) = result {
        warn!(error = %err, "could not record mood check-in");
    }
}
