//! Command dispatch and handlers.

pub mod id;
pub mod string;
pub mod time;

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command};
use crate::config::ProvidersConfig;

/// Environment variable naming a provider config file.
pub const CONFIG_ENV: &str = "CONSISTGEN_CONFIG";

/// Dispatch a parsed command to its handler and print the result.
///
/// The provider config comes from `--config`, then `CONSISTGEN_CONFIG`,
/// then the built-in defaults.
///
/// # Errors
///
/// Returns an error string if the config cannot be loaded or the command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = load_config(cli.config.as_deref())?;
    let output = dispatch_with_config(&cli.command, &config)?;
    println!("{output}");
    Ok(())
}

/// Run a command against the given config, returning its rendered output.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_config(command: &Command, config: &ProvidersConfig) -> Result<String, String> {
    match command {
        Command::Time { millis, seconds, live, json } => {
            let args = time::TimeArgs { millis: *millis, seconds: *seconds, live: *live };
            time::run(config, &args, *json)
        }
        Command::String { length, alphabet, random, seed, json } => {
            let args = string::StringArgs {
                length: *length,
                alphabet: alphabet.clone(),
                random: *random,
                seed: *seed,
            };
            string::run(config, &args, *json)
        }
        Command::Id { value, random, json } => {
            id::run(config, &id::IdArgs { value: value.clone(), random: *random }, *json)
        }
    }
}

fn load_config(flag: Option<&Path>) -> Result<ProvidersConfig, String> {
    match config_path(flag, env::var_os(CONFIG_ENV)) {
        Some(path) => ProvidersConfig::load(&path),
        None => Ok(ProvidersConfig::default()),
    }
}

/// The `--config` flag wins over the environment.
fn config_path(flag: Option<&Path>, from_env: Option<OsString>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| from_env.map(PathBuf::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.yaml");
        std::fs::write(&path, "id:\n  mode: fixed\n  value: from-file\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        let command = Command::Id { value: None, random: false, json: false };
        let out = dispatch_with_config(&command, &config).unwrap();
        assert_eq!(out, "from-file");
    }

    #[test]
    fn flag_takes_precedence_over_environment() {
        let flag = Path::new("flag.yaml");
        let from_env = Some(OsString::from("env.yaml"));
        assert_eq!(config_path(Some(flag), from_env.clone()), Some(PathBuf::from("flag.yaml")));
        assert_eq!(config_path(None, from_env), Some(PathBuf::from("env.yaml")));
        assert_eq!(config_path(None, None), None);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("missing.yaml"))).is_err());
    }
}
