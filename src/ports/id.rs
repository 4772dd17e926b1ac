//! Identifier port for producing UUID-shaped tokens.

/// Generates identifier strings.
///
/// No structural validation is applied to the returned token.
pub trait IdentifierSource: Send + Sync {
    /// Returns an identifier.
    fn generate_id(&self) -> String;
}
