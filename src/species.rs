//! Species catalog.
//!
//! The catalog is the static pokedex bundle: base stats, family and
//! evolution stage, search aliases and an image reference per species.
//! It is loaded once and read-only afterwards.

use crate::error::RankError;
use crate::family::EvolutionGraph;
use crate::level::Level;
use crate::species_id::SpeciesId;
use crate::stats::{reference_cp, BaseStats};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// A species' evolution family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    /// Id of the family's base form.
    pub id: SpeciesId,

    /// Evolution stage, 1 for the base form. Derived from `parent` when
    /// the data file leaves it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<u8>,

    /// The species this one evolves from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<SpeciesId>,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub id: SpeciesId,
    pub dex_number: u32,
    pub name: String,
    pub stats: BaseStats,
    #[serde(default)]
    pub types: Vec<String>,
    pub family: Family,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, rename = "image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Species {
    /// Evolution stage, 1 for base forms.
    pub fn stage(&self) -> u8 {
        self.family.stage.unwrap_or(1)
    }

    /// CP of a 15/15/15 specimen at `level`.
    pub fn reference_cp(&self, level: Level) -> u32 {
        reference_cp(self.stats, level)
    }

    // `term` is already lowercased
    fn matches(&self, term: &str) -> bool {
        match term.parse::<u32>() {
            Ok(dex_number) => self.dex_number == dex_number,
            Err(_) => {
                self.name.to_lowercase().contains(term)
                    || self.id.as_str().contains(term)
                    || self.aliases.iter().any(|alias| alias.to_lowercase().contains(term))
            }
        }
    }
}

/// The loaded species catalog, in data-file order.
///
/// # Examples
///
/// ```rust
/// use ivrank::SpeciesCatalog;
///
/// let json = r#"[
///   {"id": "marill", "dexNumber": 183, "name": "Marill",
///    "stats": {"atk": 37, "def": 93, "sta": 172},
///    "family": {"id": "marill"}},
///   {"id": "azumarill", "dexNumber": 184, "name": "Azumarill",
///    "stats": {"atk": 112, "def": 152, "sta": 225},
///    "family": {"id": "marill", "parent": "marill"}}
/// ]"#;
///
/// let catalog = SpeciesCatalog::from_json_str(json).unwrap();
/// let azumarill = catalog.find_by_name("azumarill").unwrap();
/// assert_eq!(azumarill.stage(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    species: Vec<Species>,
    index: HashMap<SpeciesId, usize>,
    graph: EvolutionGraph,
}

impl SpeciesCatalog {
    /// Build a catalog, filling in missing evolution stages.
    ///
    /// # Errors
    ///
    /// * `RankError::DuplicateSpecies` if two entries share an id
    /// * `RankError::UnknownSpecies` if a parent link names a missing species
    /// * `RankError::EvolutionCycle` if parent links loop
    pub fn from_species(mut species: Vec<Species>) -> Result<Self, RankError> {
        let mut index = HashMap::with_capacity(species.len());
        for (position, entry) in species.iter().enumerate() {
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(RankError::DuplicateSpecies(entry.id.clone()));
            }
        }

        let mut graph = EvolutionGraph::new();
        for entry in &species {
            graph.add_species(entry.id.clone());
            if let Some(parent) = &entry.family.parent {
                if !index.contains_key(parent) {
                    return Err(RankError::UnknownSpecies(parent.clone()));
                }
                graph.add_evolution(parent.clone(), entry.id.clone());
            }
        }

        let stages = graph.stages()?;
        for entry in species.iter_mut() {
            if entry.family.stage.is_none() {
                entry.family.stage = stages.get(&entry.id).copied();
            }
        }

        Ok(Self { species, index, graph })
    }

    /// Parse the pokedex JSON bundle (an array of species).
    pub fn from_json_str(json: &str) -> Result<Self, RankError> {
        let species: Vec<Species> = serde_json::from_str(json)?;
        let catalog = Self::from_species(species)?;
        info!(target: "ivrank::species", species = catalog.len(), "Loaded species catalog");
        Ok(catalog)
    }

    /// Read the pokedex JSON bundle from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RankError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Look up a species by id.
    pub fn get(&self, id: &SpeciesId) -> Result<&Species, RankError> {
        self.index
            .get(id)
            .map(|&position| &self.species[position])
            .ok_or_else(|| RankError::UnknownSpecies(id.clone()))
    }

    /// Look up a species by display name, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Species> {
        let name = name.to_lowercase();
        self.species.iter().find(|s| s.name.to_lowercase() == name)
    }

    /// Every form sharing a dex number.
    pub fn by_dex(&self, dex_number: u32) -> Vec<&Species> {
        self.species
            .iter()
            .filter(|s| s.dex_number == dex_number)
            .collect()
    }

    /// Search suggestions for a typed query.
    ///
    /// The query is a comma-separated list of terms, matched ignoring case.
    /// A numeric term matches the dex number exactly; any other term
    /// matches when the name, id or one of the aliases contains it. A
    /// species matching any term is returned. A query with no terms lists
    /// everything. Results keep catalog order and stop at `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Species> {
        let query = query.to_lowercase();
        let terms: Vec<&str> = query
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .collect();
        self.species
            .iter()
            .filter(|s| terms.is_empty() || terms.iter().any(|term| s.matches(term)))
            .take(limit)
            .collect()
    }

    /// Dex numbers of every species in the families of `dex_number`.
    ///
    /// All forms sharing the dex number contribute their family. Sorted and
    /// deduplicated. A dex number missing from the catalog maps to itself.
    pub fn family_dex_numbers(&self, dex_number: u32) -> Vec<u32> {
        let families: HashSet<&SpeciesId> = self
            .species
            .iter()
            .filter(|s| s.dex_number == dex_number)
            .map(|s| &s.family.id)
            .collect();
        if families.is_empty() {
            return vec![dex_number];
        }

        let mut dex_numbers: Vec<u32> = self
            .species
            .iter()
            .filter(|s| families.contains(&s.family.id))
            .map(|s| s.dex_number)
            .collect();
        dex_numbers.sort_unstable();
        dex_numbers.dedup();
        dex_numbers
    }

    /// Every species `id` can evolve into, following parent links.
    ///
    /// Ordered by stage, then catalog order. Unlike [`Self::evolution_line`]
    /// this excludes other branches of a branching family.
    pub fn descendants(&self, id: &SpeciesId) -> Result<Vec<&Species>, RankError> {
        let ids: HashSet<SpeciesId> = self.graph.descendants(id)?.into_iter().collect();
        let mut found: Vec<&Species> = self.species.iter().filter(|s| ids.contains(&s.id)).collect();
        found.sort_by_key(|s| s.stage());
        Ok(found)
    }

    /// Every species in the same family, ordered by stage.
    pub fn family_members(&self, id: &SpeciesId) -> Result<Vec<&Species>, RankError> {
        let family_id = &self.get(id)?.family.id;
        let mut members: Vec<&Species> = self
            .species
            .iter()
            .filter(|s| &s.family.id == family_id)
            .collect();
        members.sort_by_key(|s| s.stage());
        Ok(members)
    }

    /// The species and every family member at the same or a later stage.
    ///
    /// Ordered by stage. Branching families include every branch.
    pub fn evolution_line(&self, id: &SpeciesId) -> Result<Vec<&Species>, RankError> {
        let stage = self.get(id)?.stage();
        let mut members = self.family_members(id)?;
        members.retain(|s| s.stage() >= stage);
        Ok(members)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.iter()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POKEDEX: &str = r#"[
        {"id": "azurill", "dexNumber": 298, "name": "Azurill",
         "stats": {"atk": 36, "def": 71, "sta": 137}, "types": ["normal", "fairy"],
         "family": {"id": "azurill"}},
        {"id": "marill", "dexNumber": 183, "name": "Marill",
         "stats": {"atk": 37, "def": 93, "sta": 172}, "types": ["water", "fairy"],
         "family": {"id": "azurill", "parent": "azurill"}},
        {"id": "azumarill", "dexNumber": 184, "name": "Azumarill",
         "stats": {"atk": 112, "def": 152, "sta": 225}, "types": ["water", "fairy"],
         "family": {"id": "azurill", "parent": "marill"}, "aliases": ["azu"]},
        {"id": "stunfisk", "dexNumber": 618, "name": "Stunfisk",
         "stats": {"atk": 144, "def": 171, "sta": 240}, "family": {"id": "stunfisk", "stage": 1}},
        {"id": "stunfisk_galarian", "dexNumber": 618, "name": "Stunfisk (Galarian)",
         "stats": {"atk": 144, "def": 171, "sta": 240}, "family": {"id": "stunfisk_galarian", "stage": 1}}
    ]"#;

    fn catalog() -> SpeciesCatalog {
        SpeciesCatalog::from_json_str(POKEDEX).unwrap()
    }

    #[test]
    fn test_stages_derived_from_parents() {
        let catalog = catalog();
        let stage = |id: &str| catalog.get(&SpeciesId::from_str(id)).unwrap().stage();
        assert_eq!(stage("azurill"), 1);
        assert_eq!(stage("marill"), 2);
        assert_eq!(stage("azumarill"), 3);
    }

    #[test]
    fn test_explicit_stage_kept() {
        let json = r#"[{"id": "a", "dexNumber": 1, "name": "A", "stats": {"atk": 1, "def": 1, "sta": 1},
                        "family": {"id": "a", "stage": 2}}]"#;
        let catalog = SpeciesCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.iter().next().unwrap().stage(), 2);
    }

    #[test]
    fn test_unknown_species() {
        let err = catalog().get(&SpeciesId::from_str("missingno")).unwrap_err();
        assert_eq!(err, RankError::UnknownSpecies(SpeciesId::from_str("missingno")));
    }

    #[test]
    fn test_unknown_parent_rejected() {
        let json = r#"[{"id": "b", "dexNumber": 2, "name": "B", "stats": {"atk": 1, "def": 1, "sta": 1},
                        "family": {"id": "a", "parent": "a"}}]"#;
        assert_eq!(
            SpeciesCatalog::from_json_str(json).unwrap_err(),
            RankError::UnknownSpecies(SpeciesId::from_str("a"))
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let json = r#"[{"id": "a", "dexNumber": 1, "name": "A", "stats": {"atk": 1, "def": 1, "sta": 1}, "family": {"id": "a"}},
                       {"id": "a", "dexNumber": 1, "name": "A", "stats": {"atk": 1, "def": 1, "sta": 1}, "family": {"id": "a"}}]"#;
        assert_eq!(
            SpeciesCatalog::from_json_str(json).unwrap_err(),
            RankError::DuplicateSpecies(SpeciesId::from_str("a"))
        );
    }

    #[test]
    fn test_search() {
        let catalog = catalog();
        let names = |query: &str| -> Vec<String> {
            catalog.search(query, 1000).into_iter().map(|s| s.name.clone()).collect()
        };

        assert_eq!(names("").len(), 5);
        assert_eq!(names("MARILL"), vec!["Marill", "Azumarill"]);
        assert_eq!(names("618"), vec!["Stunfisk", "Stunfisk (Galarian)"]);
        assert_eq!(names("galarian"), vec!["Stunfisk (Galarian)"]);
        assert_eq!(names("azu"), vec!["Azurill", "Azumarill"]);
        assert!(names("61").is_empty());
        assert_eq!(catalog.search("", 2).len(), 2);
        assert_eq!(catalog.search(" , ", 1000).len(), 5);
    }

    #[test]
    fn test_search_multiple_terms() {
        let catalog = catalog();
        let names = |query: &str| -> Vec<String> {
            catalog.search(query, 1000).into_iter().map(|s| s.name.clone()).collect()
        };

        assert_eq!(names("618,183"), vec!["Marill", "Stunfisk", "Stunfisk (Galarian)"]);
        assert_eq!(names("azurill, galarian"), vec!["Azurill", "Stunfisk (Galarian)"]);
        assert_eq!(names("184,,nothing"), vec!["Azumarill"]);
    }

    #[test]
    fn test_search_mixed_case_alias() {
        let json = r#"[{"id": "registeel", "dexNumber": 379, "name": "Registeel",
                        "stats": {"atk": 143, "def": 285, "sta": 190},
                        "family": {"id": "registeel"}, "aliases": ["GL Tank"]}]"#;
        let catalog = SpeciesCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.search("gl tank", 10).len(), 1);
        assert_eq!(catalog.search("tank", 10).len(), 1);
        assert_eq!(catalog.search("GL Tank", 10).len(), 1);
        assert!(catalog.search("tanky", 10).is_empty());
    }

    #[test]
    fn test_family_dex_numbers() {
        let catalog = catalog();
        assert_eq!(catalog.family_dex_numbers(183), vec![183, 184, 298]);
        assert_eq!(catalog.family_dex_numbers(298), vec![183, 184, 298]);
        assert_eq!(catalog.family_dex_numbers(618), vec![618]);
        assert_eq!(catalog.family_dex_numbers(999), vec![999]);
    }

    #[test]
    fn test_descendants() {
        let catalog = catalog();
        let ids = |id: &str| -> Vec<String> {
            catalog
                .descendants(&SpeciesId::from_str(id))
                .unwrap()
                .into_iter()
                .map(|s| s.id.to_string())
                .collect()
        };
        assert_eq!(ids("azurill"), vec!["marill", "azumarill"]);
        assert!(ids("azumarill").is_empty());
        assert!(catalog.descendants(&SpeciesId::from_str("mew")).is_err());
    }

    #[test]
    fn test_lookup_ignores_id_case() {
        let catalog = catalog();
        assert_eq!(catalog.get(&SpeciesId::from_str("Azumarill")).unwrap().dex_number, 184);
    }

    #[test]
    fn test_by_dex() {
        assert_eq!(catalog().by_dex(618).len(), 2);
        assert!(catalog().by_dex(1).is_empty());
    }

    #[test]
    fn test_evolution_line() {
        let catalog = catalog();
        let line: Vec<&str> = catalog
            .evolution_line(&SpeciesId::from_str("marill"))
            .unwrap()
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(line, vec!["marill", "azumarill"]);

        let family = catalog.family_members(&SpeciesId::from_str("azumarill")).unwrap();
        assert_eq!(family.len(), 3);
        assert_eq!(family[0].id.as_str(), "azurill");
    }

    #[test]
    fn test_reference_cp() {
        let catalog = catalog();
        let azumarill = catalog.find_by_name("Azumarill").unwrap();
        let cp20 = azumarill.reference_cp(Level::new(20.0).unwrap());
        let cp25 = azumarill.reference_cp(Level::new(25.0).unwrap());
        assert!(cp20 < cp25);
    }
}
