use super::*;
use crate::report::DistanceReport;
use crate::simulation::{Operation, Simulator, StepOutcome};

/// A network and a sequence of operations to replay on it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: Option<String>,
    pub network: NetworkFile,
    pub operations: Vec<Operation>,
}

/// Outcome of replaying a [`Scenario`].
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub name: Option<String>,
    /// Distances before the first operation.
    pub initial: DistanceReport,
    pub steps: Vec<StepOutcome>,
}

impl Scenario {
    pub fn run(self) -> Result<ScenarioResult, SimulationFailure> {
        let Scenario {
            name,
            network,
            operations,
        } = self;
        let (network, config) = network.prepare()?;
        let mut simulator = Simulator::new(network, config)?;
        let initial = simulator.report()?;
        let steps = simulator.run_operations(&operations)?;
        Ok(ScenarioResult {
            name,
            initial,
            steps,
        })
    }
}
