//! # Distribution Network Resilience Library
//!
//! Models a small electrical distribution network as an undirected weighted graph, simulates
//! line failures and repairs on it, and computes the cheapest path from the power station to
//! every house after each change.
//!
//! Common functionality for the grid server and command line interface.

use serde::{Deserialize, Serialize};

pub mod graph;
pub mod io;
pub mod report;
pub mod shortest_path;
pub mod simulation;
pub mod types;

pub use graph::{Edge, Network, NetworkState};
pub use report::{Distance, DistanceReport, VertexDistance};
pub use shortest_path::compute_distances;
pub use simulation::{Operation, SimulationConfig, Simulator, StepOutcome};
pub use types::*;

/// Represents the reasons why an operation on the network might fail.
///
/// None of these are fatal: a failed operation never leaves the network partially mutated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "content")] // content will be used for BadInput(String)
pub enum SimulationFailure {
    /// There is no active edge left to fail.
    NoEdgesToRemove,
    /// The removal stack is empty.
    NothingToRestore,
    /// The requested source vertex is outside `[0, vertices)`.
    InvalidSource {
        source: VertexIndex,
        vertices: usize,
    },
    BadInput(String),
}

impl std::error::Error for SimulationFailure {}

impl std::fmt::Display for SimulationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SimulationFailure::NoEdgesToRemove => write!(f, "No more lines to remove."),
            SimulationFailure::NothingToRestore => write!(f, "No line to restore."),
            SimulationFailure::InvalidSource { source, vertices } => write!(
                f,
                "Invalid source vertex {} (network has {} vertices).",
                source, vertices
            ),
            SimulationFailure::BadInput(reason) => write!(f, "Bad input: {}", reason),
        }
    }
}
