//! Input output module.
//!
//! Contains structs to serialize and deserialize network descriptions and simulation scenarios.
use crate::graph::{Edge, Network};
use crate::simulation::SimulationConfig;
use crate::types::*;
use crate::SimulationFailure;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub mod fs;
mod scenario;
pub use scenario::*;


/// Line given as `[src, dest, weight]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEntry(pub VertexIndex, pub VertexIndex, pub Cost);

impl From<EdgeEntry> for Edge {
    fn from(entry: EdgeEntry) -> Self {
        Edge::new(entry.0, entry.1, entry.2)
    }
}

/// JSON (or YAML) representation of a distribution network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NetworkFile {
    pub name: Option<String>,
    /// Number of vertices. Vertex 0 is the power station.
    pub vertices: usize,
    /// Lines in the order they will fail.
    pub edges: Vec<EdgeEntry>,
    /// Source vertex override.
    #[serde(default)]
    pub source: Option<VertexIndex>,
}

impl NetworkFile {
    /// Check the description and build the [`Network`] and its [`SimulationConfig`].
    pub fn prepare(self) -> Result<(Network, SimulationConfig), SimulationFailure> {
        let NetworkFile {
            name: _,
            vertices,
            edges,
            source,
        } = self;

        if vertices == 0 {
            return Err(SimulationFailure::BadInput(String::from(
                "Network must have at least one vertex!",
            )));
        }

        let bad_edges = edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.0 >= vertices || e.1 >= vertices)
            .map(|(i, e)| format!("#{i} [{}, {}, {}]", e.0, e.1, e.2))
            .collect_vec();
        if !bad_edges.is_empty() {
            return Err(SimulationFailure::BadInput(format!(
                "Edges refer to vertices outside [0, {vertices}): {}",
                bad_edges.iter().join(", ")
            )));
        }

        let config = SimulationConfig {
            source: source.unwrap_or(POWER_SOURCE),
        };
        if config.source >= vertices {
            return Err(SimulationFailure::InvalidSource {
                source: config.source,
                vertices,
            });
        }

        let network = Network::new(vertices, edges.into_iter().map(Edge::from).collect());
        Ok((network, config))
    }
}

/// The four-house demonstration network: a power station connected to three houses.
pub fn demo_network() -> NetworkFile {
    NetworkFile {
        name: Some("Demo Network".to_string()),
        vertices: 4,
        edges: vec![
            EdgeEntry(0, 1, 10),
            EdgeEntry(0, 2, 6),
            EdgeEntry(0, 3, 5),
            EdgeEntry(1, 3, 15),
            EdgeEntry(2, 3, 4),
        ],
        source: None,
    }
}
