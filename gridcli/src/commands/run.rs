/// Replaying scenario files.
use super::*;

impl Run {
    pub fn run(self) {
        let Run { path, json } = self;

        let scenario = match Scenario::read_from_file(&path) {
            Ok(s) => s,
            Err(err) => fatal_error!(1, "Cannot parse scenario: {}", err),
        };
        let operations = scenario.operations.len();
        let result = match scenario.run() {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Error while running scenario: {}", err),
        };
        log::info!("Replayed {} operation(s)", operations);

        if json {
            print_json(&result);
            return;
        }

        println!(
            "{:16}{}",
            "Scenario Name:".bold(),
            result.name.as_deref().unwrap_or("-")
        );
        print_report(&result.initial);
        for (i, step) in result.steps.iter().enumerate() {
            println!();
            println!(
                "{}",
                format!("Step {}/{}: {}", i + 1, result.steps.len(), step.operation)
                    .bold()
                    .blue()
            );
            print_step(step);
        }
    }
}
