//! String port for producing alphabet-constrained strings.

use crate::error::ProviderError;

/// Generates strings of an exact length drawn from a configured alphabet.
pub trait StringSource: Send + Sync {
    /// Generates a string of exactly `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NonPositiveLength`] when `length <= 0`.
    fn generate(&self, length: i32) -> Result<String, ProviderError>;
}
