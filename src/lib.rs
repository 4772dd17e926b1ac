//! Interchangeable value providers for time, strings and identifiers.
//!
//! Each capability is a trait in [`ports`] with three kinds of
//! implementation in [`adapters`]: fixed (one value forever), mutable
//! (reassignable, still deterministic) and live (system clock or random).
//! Callers hold whichever variant they need through the trait.
//!
//! ```
//! use consistgen::adapters::fixed::FixedStringSource;
//! use consistgen::ports::StringSource;
//!
//! let strings = FixedStringSource::new(Some("abc")).unwrap();
//! assert_eq!(strings.generate(7).unwrap(), "abcabca");
//! ```

pub mod adapters;
pub mod alphabet;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod ports;
pub mod random;

pub use error::ProviderError;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
