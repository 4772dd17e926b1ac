//! Alphabets and the cycling generation algorithm shared by the
//! deterministic string providers.

use std::fmt;

use crate::error::ProviderError;

/// Alphabet used when none is configured: lowercase, uppercase, then digits.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// An ordered, non-empty set of symbols for string generation.
///
/// Symbols are Unicode scalar values, so a multi-byte character counts as a
/// single position when cycling or drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Resolves an optional alphabet.
    ///
    /// `None` yields [`DEFAULT_ALPHABET`].
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyAlphabet`] when `Some("")` is given.
    pub fn resolve(alphabet: Option<&str>) -> Result<Self, ProviderError> {
        match alphabet {
            None => Ok(Self::default()),
            Some(text) => Self::new(text),
        }
    }

    /// Builds an alphabet from the characters of `text`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::EmptyAlphabet`] when `text` is empty.
    pub fn new(text: &str) -> Result<Self, ProviderError> {
        if text.is_empty() {
            return Err(ProviderError::EmptyAlphabet);
        }
        Ok(Self { symbols: text.chars().collect() })
    }

    /// Number of symbols. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; an `Alphabet` cannot be constructed empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol at `index`, wrapping past the end.
    #[must_use]
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index % self.symbols.len()]
    }

    /// Whether `c` belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Repeats the alphabet from its first symbol until `length` characters
    /// have been produced: position `i` holds `self[i mod len]`.
    #[must_use]
    pub fn cycle(&self, length: usize) -> String {
        self.symbols.iter().cycle().take(length).collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self { symbols: DEFAULT_ALPHABET.chars().collect() }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Validates a requested output length, converting it to `usize`.
///
/// Checked before any generation work happens.
pub(crate) fn checked_length(length: i32) -> Result<usize, ProviderError> {
    usize::try_from(length)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(ProviderError::NonPositiveLength { length })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alphabet_has_62_symbols() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 62);
        assert_eq!(alphabet.to_string(), DEFAULT_ALPHABET);
    }

    #[test]
    fn resolve_none_uses_default() {
        assert_eq!(Alphabet::resolve(None).unwrap(), Alphabet::default());
    }

    #[test]
    fn resolve_empty_is_rejected() {
        assert_eq!(Alphabet::resolve(Some("")), Err(ProviderError::EmptyAlphabet));
    }

    #[test]
    fn cycle_wraps_to_start() {
        let alphabet = Alphabet::new("abc").unwrap();
        assert_eq!(alphabet.cycle(5), "abcab");
        assert_eq!(alphabet.cycle(7), "abcabca");
    }

    #[test]
    fn cycle_matches_index_formula() {
        let alphabet = Alphabet::new("xyz12").unwrap();
        let out: Vec<char> = alphabet.cycle(23).chars().collect();
        for (i, c) in out.iter().enumerate() {
            assert_eq!(*c, alphabet.symbol(i));
        }
    }

    #[test]
    fn multibyte_symbols_count_once() {
        let alphabet = Alphabet::new("αβ").unwrap();
        assert_eq!(alphabet.len(), 2);
        assert_eq!(alphabet.cycle(3), "αβα");
    }

    #[test]
    fn checked_length_rejects_zero_and_negative() {
        assert_eq!(checked_length(0), Err(ProviderError::NonPositiveLength { length: 0 }));
        assert_eq!(checked_length(-5), Err(ProviderError::NonPositiveLength { length: -5 }));
        assert_eq!(checked_length(3), Ok(3));
    }
}
