//! Driving the network through failures and repairs.
//!
//! Every mutation is followed by a fresh shortest path computation, so the caller always gets
//! the distance report that matches the current set of active lines.
use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Network, NetworkState};
use crate::report::DistanceReport;
use crate::shortest_path::compute_distances;
use crate::types::*;
use crate::SimulationFailure;


/// Simulation settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Vertex from which distances are measured.
    #[serde(default)]
    pub source: VertexIndex,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            source: POWER_SOURCE,
        }
    }
}

/// A single step of a simulation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Fail the line at the head of the active list.
    Remove,
    /// Repair the most recently failed line.
    Restore,
    /// Repair every line.
    Reset,
    /// Only compute the distances.
    Report,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Operation::Remove => "remove",
            Operation::Restore => "restore",
            Operation::Reset => "reset",
            Operation::Report => "report",
        };
        write!(f, "{}", s)
    }
}

/// Result of applying an [`Operation`].
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StepOutcome {
    pub operation: Operation,
    /// Line removed or restored in this step.
    pub edge: Option<Edge>,
    /// Set if the network refused the operation. The network is unchanged in that case.
    pub failure: Option<SimulationFailure>,
    pub state: NetworkState,
    pub report: DistanceReport,
}

/// Owns a [`Network`] and recomputes distances after each change.
#[derive(Clone, Debug)]
pub struct Simulator {
    network: Network,
    config: SimulationConfig,
}

impl Simulator {
    /// Fails if the configured source is not a vertex of the network.
    pub fn new(network: Network, config: SimulationConfig) -> Result<Self, SimulationFailure> {
        if config.source >= network.vertex_count() {
            return Err(SimulationFailure::InvalidSource {
                source: config.source,
                vertices: network.vertex_count(),
            });
        }
        Ok(Self { network, config })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Distances for the current set of active lines.
    pub fn report(&self) -> Result<DistanceReport, SimulationFailure> {
        compute_distances(&self.network, self.config.source)
    }

    fn outcome(
        &self,
        operation: Operation,
        edge: Option<Edge>,
        failure: Option<SimulationFailure>,
    ) -> Result<StepOutcome, SimulationFailure> {
        Ok(StepOutcome {
            operation,
            edge,
            failure,
            state: self.network.state(),
            report: self.report()?,
        })
    }

    /// Fail one line and recompute.
    pub fn simulate_failure(&mut self) -> Result<StepOutcome, SimulationFailure> {
        let edge = self.network.remove_one()?;
        self.outcome(Operation::Remove, Some(edge), None)
    }

    /// Repair the most recently failed line and recompute.
    pub fn restore(&mut self) -> Result<StepOutcome, SimulationFailure> {
        let edge = self.network.restore_one()?;
        self.outcome(Operation::Restore, Some(edge), None)
    }

    /// Repair every line and recompute.
    pub fn reset(&mut self) -> Result<StepOutcome, SimulationFailure> {
        self.network.reset();
        self.outcome(Operation::Reset, None, None)
    }

    /// Apply an operation. Unlike the dedicated methods, a refused removal or restoration is
    /// recorded in the returned [`StepOutcome`] instead of being returned as an error.
    pub fn apply(&mut self, operation: Operation) -> Result<StepOutcome, SimulationFailure> {
        let step = match operation {
            Operation::Remove => self.network.remove_one(),
            Operation::Restore => self.network.restore_one(),
            Operation::Reset => {
                self.network.reset();
                return self.outcome(operation, None, None);
            }
            Operation::Report => return self.outcome(operation, None, None),
        };
        match step {
            Ok(edge) => self.outcome(operation, Some(edge), None),
            Err(failure) => self.outcome(operation, None, Some(failure)),
        }
    }

    /// Apply the given operations in order.
    pub fn run_operations(
        &mut self,
        operations: &[Operation],
    ) -> Result<Vec<StepOutcome>, SimulationFailure> {
        operations.iter().map(|&op| self.apply(op)).collect()
    }
}
