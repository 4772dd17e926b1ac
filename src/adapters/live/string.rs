//! Random adapter for the `StringSource` port.

use parking_lot::Mutex;

use crate::alphabet::{checked_length, Alphabet};
use crate::error::ProviderError;
use crate::ports::StringSource;
use crate::random::{self, UniformSource};

/// String source drawing each character independently and uniformly from
/// its alphabet.
///
/// Defaults to the operating system's secure RNG. Inject a seeded source
/// through [`with_source`](Self::with_source) for reproducible output.
pub struct RandomStringSource {
    alphabet: Alphabet,
    source: Mutex<Box<dyn UniformSource>>,
}

impl RandomStringSource {
    /// Creates a random string source.
    ///
    /// `alphabet` of `None` selects the default alphabet; `source` of `None`
    /// selects the secure OS generator.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyAlphabet`] when `Some("")` is given.
    pub fn new(
        alphabet: Option<&str>,
        source: Option<Box<dyn UniformSource>>,
    ) -> Result<Self, ProviderError> {
        let alphabet = Alphabet::resolve(alphabet)?;
        Ok(Self::from_parts(alphabet, source))
    }

    /// Creates a random string source drawing from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyAlphabet`] when `Some("")` is given.
    pub fn with_source<S>(alphabet: Option<&str>, source: S) -> Result<Self, ProviderError>
    where
        S: UniformSource + 'static,
    {
        Self::new(alphabet, Some(Box::new(source)))
    }

    /// Returns the configured alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn from_parts(alphabet: Alphabet, source: Option<Box<dyn UniformSource>>) -> Self {
        let injected = source.is_some();
        tracing::debug!(symbols = alphabet.len(), injected, "random string source configured");
        Self { alphabet, source: Mutex::new(source.unwrap_or_else(random::secure)) }
    }
}

impl Default for RandomStringSource {
    fn default() -> Self {
        Self::from_parts(Alphabet::default(), None)
    }
}

impl std::fmt::Debug for RandomStringSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomStringSource")
            .field("alphabet", &self.alphabet)
            .finish_non_exhaustive()
    }
}

impl StringSource for RandomStringSource {
    fn generate(&self, length: i32) -> Result<String, ProviderError> {
        let length = checked_length(length)?;
        let bound = self.alphabet.len();
        let mut source = self.source.lock();
        let draw = |_: usize| self.alphabet.symbol(source.next_below(bound));
        let out: String = (0..length).map(draw).collect();
        tracing::trace!(length, "random string generated");
        Ok(out)
    }
}
