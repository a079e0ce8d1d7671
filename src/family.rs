//! Evolution graph module.
//!
//! Provides the `EvolutionGraph` type, which represents evolution links
//! between species as a directed acyclic graph. The catalog uses it to
//! derive each species' evolution stage from its parent links.

use crate::error::RankError;
use crate::species_id::SpeciesId;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use petgraph::Direction;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// A directed graph of evolutions. An edge runs from a species to the
/// species it evolves into.
///
/// # Examples
///
/// ```rust
/// use ivrank::family::EvolutionGraph;
/// use ivrank::SpeciesId;
///
/// let mut graph = EvolutionGraph::new();
/// let azurill = SpeciesId::from_str("azurill");
/// let marill = SpeciesId::from_str("marill");
/// let azumarill = SpeciesId::from_str("azumarill");
///
/// graph.add_evolution(azurill.clone(), marill.clone());
/// graph.add_evolution(marill.clone(), azumarill.clone());
///
/// let stages = graph.stages().unwrap();
/// assert_eq!(stages[&azurill], 1);
/// assert_eq!(stages[&azumarill], 3);
/// assert_eq!(graph.descendants(&azurill).unwrap(), vec![azumarill, marill]);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionGraph {
    graph: DiGraph<SpeciesId, ()>,
    node_map: HashMap<SpeciesId, NodeIndex>,
}

impl EvolutionGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Add a species if it isn't in the graph yet, returning its node.
    pub fn add_species(&mut self, id: SpeciesId) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(&id) {
            idx
        } else {
            let idx = self.graph.add_node(id.clone());
            self.node_map.insert(id, idx);
            idx
        }
    }

    /// Record that `parent` evolves into `child`.
    pub fn add_evolution(&mut self, parent: SpeciesId, child: SpeciesId) {
        let parent_idx = self.add_species(parent);
        let child_idx = self.add_species(child);
        self.graph.add_edge(parent_idx, child_idx, ());
    }

    pub fn contains(&self, id: &SpeciesId) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Every species `id` evolves into, directly or through later stages.
    ///
    /// Sorted by id. `id` itself is not included.
    ///
    /// # Errors
    ///
    /// `RankError::UnknownSpecies` if `id` is not in the graph.
    pub fn descendants(&self, id: &SpeciesId) -> Result<Vec<SpeciesId>, RankError> {
        let start = *self
            .node_map
            .get(id)
            .ok_or_else(|| RankError::UnknownSpecies(id.clone()))?;

        let mut dfs = Dfs::new(&self.graph, start);
        let mut found = Vec::new();
        while let Some(idx) = dfs.next(&self.graph) {
            if idx != start {
                found.push(self.graph[idx].clone());
            }
        }
        found.sort();
        Ok(found)
    }

    /// Detect evolution cycles.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the links form a DAG
    /// * `Err(RankError::EvolutionCycle)` with the cycle path, first species
    ///   repeated at the end
    pub fn detect_cycles(&self) -> Result<(), RankError> {
        let mut visited = HashSet::new();
        let mut on_stack = HashSet::new();

        for node_idx in self.graph.node_indices() {
            if !visited.contains(&node_idx) {
                let mut path = Vec::new();
                if let Some(cycle) = self.dfs_cycle_detect(node_idx, &mut visited, &mut on_stack, &mut path) {
                    return Err(cycle);
                }
            }
        }

        Ok(())
    }

    fn dfs_cycle_detect(
        &self,
        node: NodeIndex,
        visited: &mut HashSet<NodeIndex>,
        on_stack: &mut HashSet<NodeIndex>,
        path: &mut Vec<SpeciesId>,
    ) -> Option<RankError> {
        visited.insert(node);
        on_stack.insert(node);
        path.push(self.graph[node].clone());

        for next in self.graph.neighbors_directed(node, Direction::Outgoing) {
            if !visited.contains(&next) {
                if let Some(cycle) = self.dfs_cycle_detect(next, visited, on_stack, path) {
                    return Some(cycle);
                }
            } else if on_stack.contains(&next) {
                let repeated = self.graph[next].clone();
                let start = path.iter().position(|id| id == &repeated).unwrap_or(0);
                let mut cycle = path[start..].to_vec();
                cycle.push(repeated);
                return Some(RankError::EvolutionCycle { path: cycle });
            }
        }

        on_stack.remove(&node);
        path.pop();
        None
    }

    /// Evolution stage of every species.
    ///
    /// A species with no parent is stage 1; otherwise its stage is one more
    /// than its parent's. With several parents the deepest one wins.
    pub fn stages(&self) -> Result<HashMap<SpeciesId, u8>, RankError> {
        self.detect_cycles()?;

        let order = toposort(&self.graph, None).map_err(|cycle| RankError::EvolutionCycle {
            path: vec![self.graph[cycle.node_id()].clone()],
        })?;

        let mut by_node: HashMap<NodeIndex, u8> = HashMap::with_capacity(order.len());
        for idx in order {
            let stage = self
                .graph
                .neighbors_directed(idx, Direction::Incoming)
                .filter_map(|parent| by_node.get(&parent).copied())
                .max()
                .map_or(1, |parent_stage| parent_stage.saturating_add(1));
            trace!(target: "ivrank::family", species = %self.graph[idx], stage, "Derived evolution stage");
            by_node.insert(idx, stage);
        }

        Ok(by_node
            .into_iter()
            .map(|(idx, stage)| (self.graph[idx].clone(), stage))
            .collect())
    }
}

impl Default for EvolutionGraph {
    fn default() -> Self {
        Self::new()
    }
}
