//! Live adapter for the `IdentifierSource` port.

use uuid::Uuid;

use crate::ports::IdentifierSource;

/// Live identifier source that produces random (version 4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdentifierSource;

impl RandomIdentifierSource {
    /// Creates a new random identifier source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdentifierSource for RandomIdentifierSource {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_unique_ids() {
        let ids = RandomIdentifierSource::new();
        let id1 = ids.generate_id();
        let id2 = ids.generate_id();

        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // 8-4-4-4-12
    }

    #[test]
    fn ids_are_version_4() {
        let id = RandomIdentifierSource::new().generate_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }
}
