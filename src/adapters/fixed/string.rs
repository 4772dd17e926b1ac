//! Fixed adapter for the `StringSource` port.

use crate::alphabet::{checked_length, Alphabet};
use crate::error::ProviderError;
use crate::ports::StringSource;

/// Deterministic string source that cycles through a fixed alphabet.
///
/// `generate(n)` always returns the first `n` characters of the alphabet
/// repeated end to end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixedStringSource {
    alphabet: Alphabet,
}

impl FixedStringSource {
    /// Creates a fixed string source.
    ///
    /// `None` selects the default alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyAlphabet`] when `Some("")` is given.
    pub fn new(alphabet: Option<&str>) -> Result<Self, ProviderError> {
        let alphabet = Alphabet::resolve(alphabet)?;
        tracing::debug!(symbols = alphabet.len(), "fixed string source configured");
        Ok(Self { alphabet })
    }

    /// Returns the configured alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl StringSource for FixedStringSource {
    fn generate(&self, length: i32) -> Result<String, ProviderError> {
        let length = checked_length(length)?;
        Ok(self.alphabet.cycle(length))
    }
}
