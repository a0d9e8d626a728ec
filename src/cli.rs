use clap::{Parser, Subcommand, value_parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "capy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(before_help = crate::content::BANNER)]
pub struct Cli {
    /// Directory holding the journal files
    #[arg(long, short = 'd', global = true, env = "CAPY_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Seed for picking affirmations, for repeatable output
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone)]
pub enum Command {
    /// Manipulate journal entries
    Entry {
        #[clap(subcommand)]
        entry_command: EntryCommand,
    },
    /// Show every mood check-in
    Log,
    /// Mental health resources
    Resources,
    /// Tips for building healthy habits
    Habits,
}

#[derive(Subcommand, Clone)]
pub enum EntryCommand {
    /// Write a new entry
    Add {
        /// How are you feeling? Happy, Sad, Angry, Anxious, Excited, Stressed, Other, or your own word
        #[arg(long, short = 'm')]
        mood: String,

        /// What's on your mind?
        #[arg(default_value = "")]
        text: String,
    },
    /// Remove an entry
    Remove {
        /// Number of the entry, as shown by `entry list`
        #[arg(value_parser = value_parser!(u32).range(1..))]
        number: u32,
    },
    /// List previous entries
    List,
}
