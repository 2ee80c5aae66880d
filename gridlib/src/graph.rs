//! Mutable network with reversible line failures.
use serde::{Deserialize, Serialize};

use crate::types::*;
use crate::SimulationFailure;


/// An undirected, weighted line between two vertices.
///
/// The order of `src` and `dest` carries no meaning.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub src: VertexIndex,
    pub dest: VertexIndex,
    pub weight: Cost,
}

impl Edge {
    pub fn new(src: VertexIndex, dest: VertexIndex, weight: Cost) -> Self {
        Self { src, dest, weight }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{} ({})", self.src, self.dest, self.weight)
    }
}

/// Degradation level of a [`Network`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    /// No line has failed.
    Nominal,
    /// Some lines have failed, some are still active.
    Degraded,
    /// Every line has failed.
    FullyDegraded,
}

/// Contains the lines of the distribution system and the history of failures.
///
/// Edges are never created or destroyed after construction, they are only moved between the
/// active list and the removal stack. Hence `active + removed = original` holds after every
/// operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    vertex_count: usize,
    /// Lines in use, in the order they will be failed.
    active: Vec<Edge>,
    /// Snapshot taken at construction.
    original: Vec<Edge>,
    /// Failed lines, most recent on top.
    removed: Vec<Edge>,
}

impl Network {
    /// Create a network with `vertex_count` vertices where all given `edges` are active.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            vertex_count,
            active: edges.clone(),
            original: edges,
            removed: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Active edges in their current order.
    pub fn active_edges(&self) -> &[Edge] {
        &self.active
    }

    /// Edges as given at construction.
    pub fn original_edges(&self) -> &[Edge] {
        &self.original
    }

    /// Removed edges from the oldest failure to the most recent one.
    pub fn removed_edges(&self) -> &[Edge] {
        &self.removed
    }

    pub fn state(&self) -> NetworkState {
        if self.removed.is_empty() {
            NetworkState::Nominal
        } else if self.active.is_empty() {
            NetworkState::FullyDegraded
        } else {
            NetworkState::Degraded
        }
    }

    /// Fail the edge at the head of the active list and push it onto the removal stack.
    pub fn remove_one(&mut self) -> Result<Edge, SimulationFailure> {
        if self.active.is_empty() {
            log::warn!("No more lines to remove");
            return Err(SimulationFailure::NoEdgesToRemove);
        }
        let edge = self.active.remove(0);
        self.removed.push(edge);
        log::info!("Line removed: {edge}");
        Ok(edge)
    }

    /// Pop the most recently failed edge and append it to the tail of the active list.
    pub fn restore_one(&mut self) -> Result<Edge, SimulationFailure> {
        let edge = match self.removed.pop() {
            Some(edge) => edge,
            None => {
                log::warn!("No line to restore");
                return Err(SimulationFailure::NothingToRestore);
            }
        };
        self.active.push(edge);
        log::info!("Line restored: {edge}");
        Ok(edge)
    }

    /// Return to the original configuration, forgetting every failure.
    pub fn reset(&mut self) {
        self.active.clone_from(&self.original);
        self.removed.clear();
        log::info!("Network reset ({} lines active)", self.active.len());
    }
}
