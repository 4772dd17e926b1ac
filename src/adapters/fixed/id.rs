//! Fixed adapter for the `IdentifierSource` port.

use crate::ports::IdentifierSource;

/// Textual form of the nil UUID, used when no identifier is configured.
pub const NIL_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Identifier source that always returns the same token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIdentifierSource {
    id: String,
}

impl FixedIdentifierSource {
    /// Creates a fixed identifier source. `None` selects [`NIL_ID`].
    #[must_use]
    pub fn new(id: Option<&str>) -> Self {
        Self { id: id.unwrap_or(NIL_ID).to_string() }
    }
}

impl Default for FixedIdentifierSource {
    fn default() -> Self {
        Self::new(None)
    }
}

impl IdentifierSource for FixedIdentifierSource {
    fn generate_id(&self) -> String {
        self.id.clone()
    }
}
