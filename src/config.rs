//! Provider selection loaded from YAML.
//!
//! Each family has its own section naming a `mode` plus the options for
//! that variant. Missing sections fall back to the fixed variant with its
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Per-family provider configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvidersConfig {
    /// Time source selection.
    #[serde(default)]
    pub time: TimeConfig,
    /// String source selection.
    #[serde(default)]
    pub string: StringConfig,
    /// Identifier source selection.
    #[serde(default)]
    pub id: IdConfig,
}

/// Optional instant for a fixed time source. Milliseconds take priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValues {
    /// Milliseconds since the Unix epoch.
    pub millis: Option<i64>,
    /// Seconds since the Unix epoch; used only when `millis` is absent.
    pub seconds: Option<i64>,
}

/// Time source selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TimeConfig {
    /// Pinned instant.
    Fixed(TimeValues),
    /// System clock.
    Live,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self::Fixed(TimeValues::default())
    }
}

/// String source selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum StringConfig {
    /// Alphabet cycling.
    Fixed {
        /// Alphabet; the default alphabet when absent.
        alphabet: Option<String>,
    },
    /// Uniform random draws.
    Random {
        /// Alphabet; the default alphabet when absent.
        alphabet: Option<String>,
        /// Seed for reproducible output; the OS secure RNG when absent.
        seed: Option<u64>,
    },
}

impl Default for StringConfig {
    fn default() -> Self {
        Self::Fixed { alphabet: None }
    }
}

/// Identifier source selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum IdConfig {
    /// Constant token.
    Fixed {
        /// Token; the nil UUID when absent.
        value: Option<String>,
    },
    /// Random version 4 UUIDs.
    Random,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self::Fixed { value: None }
    }
}

impl ProvidersConfig {
    /// Parse a configuration from YAML text. Blank text yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or names an unknown mode.
    pub fn from_yaml(text: &str) -> Result<Self, String> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| format!("Failed to parse provider config: {e}"))
    }

    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
        let config = Self::from_yaml(&content).map_err(|e| format!("{e} (in {})", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded provider config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_default() {
        assert_eq!(ProvidersConfig::from_yaml("").unwrap(), ProvidersConfig::default());
        assert_eq!(ProvidersConfig::from_yaml("  \n").unwrap(), ProvidersConfig::default());
    }

    #[test]
    fn parses_every_section() {
        let yaml = r"
time:
  mode: fixed
  millis: 123456789
  seconds: 123456
string:
  mode: random
  alphabet: abc
  seed: 42
id:
  mode: fixed
  value: my-id
";
        let config = ProvidersConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.time,
            TimeConfig::Fixed(TimeValues { millis: Some(123_456_789), seconds: Some(123_456) })
        );
        assert_eq!(
            config.string,
            StringConfig::Random { alphabet: Some("abc".into()), seed: Some(42) }
        );
        assert_eq!(config.id, IdConfig::Fixed { value: Some("my-id".into()) });
    }

    #[test]
    fn missing_sections_default_to_fixed() {
        let config = ProvidersConfig::from_yaml("time:\n  mode: live\n").unwrap();
        assert_eq!(config.time, TimeConfig::Live);
        assert_eq!(config.string, StringConfig::Fixed { alphabet: None });
        assert_eq!(config.id, IdConfig::Fixed { value: None });
    }

    #[test]
    fn fixed_time_fields_are_optional() {
        let config = ProvidersConfig::from_yaml("time:\n  mode: fixed\n  seconds: 10\n").unwrap();
        assert_eq!(config.time, TimeConfig::Fixed(TimeValues { millis: None, seconds: Some(10) }));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = ProvidersConfig::from_yaml("id:\n  mode: sequential\n").unwrap_err();
        assert!(err.contains("Failed to parse provider config"));
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(ProvidersConfig::from_yaml("clock:\n  mode: live\n").is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("providers.yaml");
        std::fs::write(&path, "string:\n  mode: fixed\n  alphabet: xyz\n").unwrap();

        let config = ProvidersConfig::load(&path).unwrap();
        assert_eq!(config.string, StringConfig::Fixed { alphabet: Some("xyz".into()) });
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProvidersConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.contains("Failed to read config file"));
    }
}
