//! Species identifier module.
//!
//! Provides the `SpeciesId` type, an interned string identifier such as
//! `"medicham"` or `"stunfisk_galarian"`. Uses `Arc<str>` so catalog
//! lookups and evolution-graph nodes share one allocation per id.
//!
//! Ids are case-insensitive: they are trimmed and lowercased on
//! construction, so `"Medicham"` and `"medicham"` name the same species.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

/// Interned string identifier for species.
///
/// # Examples
///
/// ```rust
/// use ivrank::SpeciesId;
///
/// let a = SpeciesId::from_str("azumarill");
/// let b: SpeciesId = "azumarill".into();
/// let c: SpeciesId = String::from("Azumarill ").into();
///
/// assert_eq!(a, b);
/// assert_eq!(a, c);
/// assert_eq!(c.as_str(), "azumarill");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpeciesId(Arc<str>);

impl Serialize for SpeciesId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SpeciesId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SpeciesId::from(s))
    }
}

impl SpeciesId {
    /// Create a new `SpeciesId` from a string slice, normalised to
    /// lowercase.
    pub fn from_str(s: &str) -> Self {
        Self(Arc::from(s.trim().to_lowercase()))
    }

    /// Get the string representation of this `SpeciesId`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SpeciesId {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for SpeciesId {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

impl std::fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_id_creation() {
        let id1 = SpeciesId::from_str("marill");
        let id2 = SpeciesId::from_str("marill");
        assert_eq!(id1, id2);
        assert_eq!(id1.as_str(), "marill");
    }

    #[test]
    fn test_species_id_is_case_insensitive() {
        let id = SpeciesId::from_str("  Stunfisk_Galarian ");
        assert_eq!(id, SpeciesId::from_str("stunfisk_galarian"));
        assert_eq!(id.to_string(), "stunfisk_galarian");

        let back: SpeciesId = serde_json::from_str("\"MEDICHAM\"").unwrap();
        assert_eq!(back.as_str(), "medicham");
    }

    #[test]
    fn test_species_id_serde() {
        let id = SpeciesId::from_str("stunfisk_galarian");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"stunfisk_galarian\"");
        let back: SpeciesId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
