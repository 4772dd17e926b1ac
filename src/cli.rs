//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `consistgen`.
#[derive(Debug, Parser)]
#[command(name = "consistgen", version, about = "Generate time, string and identifier values")]
pub struct Cli {
    /// Provider config file (YAML). Defaults to `$CONSISTGEN_CONFIG` when set.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current time from the configured time source.
    Time {
        /// Pin the time to this many milliseconds since the epoch.
        #[arg(long, allow_negative_numbers = true)]
        millis: Option<i64>,
        /// Pin the time to this many seconds (ignored when --millis is given).
        #[arg(long, allow_negative_numbers = true)]
        seconds: Option<i64>,
        /// Read the system clock.
        #[arg(long, conflicts_with_all = ["millis", "seconds"])]
        live: bool,
        /// Emit JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Generate a string from an alphabet.
    String {
        /// Number of characters to generate.
        #[arg(long, short, allow_negative_numbers = true)]
        length: i32,
        /// Alphabet to draw from.
        #[arg(long)]
        alphabet: Option<String>,
        /// Draw characters at random instead of cycling the alphabet.
        #[arg(long)]
        random: bool,
        /// Seed for reproducible random output.
        #[arg(long, requires = "random")]
        seed: Option<u64>,
        /// Emit JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Print an identifier.
    Id {
        /// Fixed identifier to return.
        #[arg(long, conflicts_with = "random")]
        value: Option<String>,
        /// Generate a random UUID.
        #[arg(long)]
        random: bool,
        /// Emit JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
}
