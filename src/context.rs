//! Provider context bundling one source per capability.

use crate::adapters::fixed::{FixedIdentifierSource, FixedStringSource, FixedTimeSource};
use crate::adapters::live::{LiveTimeSource, RandomIdentifierSource, RandomStringSource};
use crate::config::{IdConfig, ProvidersConfig, StringConfig, TimeConfig};
use crate::error::ProviderError;
use crate::ports::{IdentifierSource, StringSource, TimeSource};
use crate::random;

/// Bundles the three capability trait objects into a single context.
///
/// Constructors wire up different variants. Each call returns a fresh
/// instance; share one by passing it (or an `Arc` of it) explicitly.
pub struct ProviderContext {
    /// Source of the current time.
    pub time: Box<dyn TimeSource>,
    /// Source of generated strings.
    pub strings: Box<dyn StringSource>,
    /// Source of identifiers.
    pub ids: Box<dyn IdentifierSource>,
}

impl ProviderContext {
    /// Creates a fully deterministic context: epoch time, the default
    /// alphabet cycled, and the nil identifier.
    #[must_use]
    pub fn fixed() -> Self {
        Self {
            time: Box::new(FixedTimeSource::default()),
            strings: Box::new(FixedStringSource::default()),
            ids: Box::new(FixedIdentifierSource::default()),
        }
    }

    /// Creates a live context: system clock, secure random strings and
    /// random UUIDs.
    #[must_use]
    pub fn live() -> Self {
        Self {
            time: Box::new(LiveTimeSource),
            strings: Box::new(RandomStringSource::default()),
            ids: Box::new(RandomIdentifierSource::new()),
        }
    }

    /// Creates a context with the variants selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyAlphabet`] when a string section names
    /// an empty alphabet.
    pub fn from_config(config: &ProvidersConfig) -> Result<Self, ProviderError> {
        let time: Box<dyn TimeSource> = match config.time {
            TimeConfig::Fixed(values) => Box::new(FixedTimeSource::from_config(&values)),
            TimeConfig::Live => Box::new(LiveTimeSource),
        };

        let strings: Box<dyn StringSource> = match &config.string {
            StringConfig::Fixed { alphabet } => {
                Box::new(FixedStringSource::new(alphabet.as_deref())?)
            }
            StringConfig::Random { alphabet, seed: Some(seed) } => Box::new(
                RandomStringSource::with_source(alphabet.as_deref(), random::seeded(*seed))?,
            ),
            StringConfig::Random { alphabet, seed: None } => {
                Box::new(RandomStringSource::new(alphabet.as_deref(), None)?)
            }
        };

        let ids: Box<dyn IdentifierSource> = match &config.id {
            IdConfig::Fixed { value } => Box::new(FixedIdentifierSource::new(value.as_deref())),
            IdConfig::Random => Box::new(RandomIdentifierSource::new()),
        };

        Ok(Self { time, strings, ids })
    }
}

impl Default for ProviderContext {
    fn default() -> Self {
        Self::fixed()
    }
}
