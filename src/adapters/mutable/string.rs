//! Mutable adapter for the `StringSource` port.

use crate::alphabet::{checked_length, Alphabet};
use crate::error::ProviderError;
use crate::ports::StringSource;

/// Deterministic cycling string source whose alphabet can be replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutableStringSource {
    alphabet: Alphabet,
}

impl MutableStringSource {
    /// Creates a mutable string source. `None` selects the default alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyAlphabet`] when `Some("")` is given.
    pub fn new(alphabet: Option<&str>) -> Result<Self, ProviderError> {
        Ok(Self { alphabet: Alphabet::resolve(alphabet)? })
    }

    /// Replaces the alphabet. `None` restores the default alphabet.
    ///
    /// On error the previous alphabet is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyAlphabet`] when `Some("")` is given.
    pub fn set_alphabet(&mut self, alphabet: Option<&str>) -> Result<(), ProviderError> {
        self.alphabet = Alphabet::resolve(alphabet)?;
        tracing::debug!(symbols = self.alphabet.len(), "mutable string alphabet set");
        Ok(())
    }

    /// Returns the current alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl StringSource for MutableStringSource {
    fn generate(&self, length: i32) -> Result<String, ProviderError> {
        let length = checked_length(length)?;
        Ok(self.alphabet.cycle(length))
    }
}
