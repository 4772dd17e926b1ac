//! `consistgen string` command.

use serde_json::json;

use crate::config::{ProvidersConfig, StringConfig};
use crate::context::ProviderContext;

/// Flags accepted by the `string` command.
#[derive(Debug, Clone, Default)]
pub struct StringArgs {
    /// Requested length.
    pub length: i32,
    /// Alphabet override.
    pub alphabet: Option<String>,
    /// Switch to random draws.
    pub random: bool,
    /// Seed for random draws.
    pub seed: Option<u64>,
}

/// Execute the `string` command.
///
/// # Errors
///
/// Returns the provider's error message for an empty alphabet or a
/// non-positive length.
pub fn run(config: &ProvidersConfig, args: &StringArgs, json: bool) -> Result<String, String> {
    let string = apply_flags(&config.string, args);
    let config = ProvidersConfig { string, ..config.clone() };
    let ctx = ProviderContext::from_config(&config).map_err(|e| e.to_string())?;

    let value = ctx.strings.generate(args.length).map_err(|e| e.to_string())?;
    if json {
        return Ok(json!({ "value": value, "length": args.length }).to_string());
    }
    Ok(value)
}

/// `--random` switches to random mode; `--alphabet` replaces the alphabet
/// while keeping whichever mode is active.
fn apply_flags(configured: &StringConfig, args: &StringArgs) -> StringConfig {
    let (configured_alphabet, configured_seed) = match configured {
        StringConfig::Fixed { alphabet } => (alphabet.clone(), None),
        StringConfig::Random { alphabet, seed } => (alphabet.clone(), *seed),
    };
    let alphabet = args.alphabet.clone().or(configured_alphabet);

    match configured {
        StringConfig::Random { .. } => {
            StringConfig::Random { alphabet, seed: args.seed.or(configured_seed) }
        }
        StringConfig::Fixed { .. } if args.random => {
            StringConfig::Random { alphabet, seed: args.seed }
        }
        StringConfig::Fixed { .. } => StringConfig::Fixed { alphabet },
    }
}
