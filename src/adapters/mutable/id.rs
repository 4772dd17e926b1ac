//! Mutable adapter for the `IdentifierSource` port.

use crate::adapters::fixed::id::NIL_ID;
use crate::ports::IdentifierSource;

/// Identifier source returning whichever token was assigned last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutableIdentifierSource {
    id: String,
}

impl MutableIdentifierSource {
    /// Creates a mutable identifier source. `None` selects [`NIL_ID`].
    #[must_use]
    pub fn new(id: Option<&str>) -> Self {
        Self { id: id.unwrap_or(NIL_ID).to_string() }
    }

    /// Replaces the token. `None` resets it to [`NIL_ID`].
    pub fn set_id(&mut self, id: Option<&str>) {
        id.unwrap_or(NIL_ID).clone_into(&mut self.id);
        tracing::debug!("mutable identifier set");
    }
}

impl Default for MutableIdentifierSource {
    fn default() -> Self {
        Self::new(None)
    }
}

impl IdentifierSource for MutableIdentifierSource {
    fn generate_id(&self) -> String {
        self.id.clone()
    }
}
