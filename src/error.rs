//! Errors raised by value providers.

use thiserror::Error;

/// Invalid-argument conditions reported by the string providers.
///
/// These are the only failures in the crate. Both are raised synchronously
/// and nothing is generated when either occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// A string of zero or negative length was requested.
    #[error("length must be greater than 0")]
    NonPositiveLength {
        /// The rejected length.
        length: i32,
    },
    /// An alphabet was supplied but contained no characters.
    #[error("alphabet must not be empty")]
    EmptyAlphabet,
}

impl ProviderError {
    /// Returns `true` when the error describes a bad caller-supplied argument.
    ///
    /// Every current variant is an invalid argument; the method exists so
    /// callers can match on the category rather than the variant.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::NonPositiveLength { .. } | Self::EmptyAlphabet)
    }
}
