/// Printing distances of a network before any failure.
use super::*;

impl Report {
    pub fn run(self) {
        let Report { path, source, json } = self;
        let (name, simulator) = load_simulator(path, source);
        let report = match simulator.report() {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot compute distances: {}", err),
        };

        if json {
            print_json(&report);
            return;
        }

        let network = simulator.network();
        println!("{:16}{}", "Network Name:".bold(), name);
        println!("{:16}{}", "Vertices:".bold(), network.vertex_count());
        println!("{:16}{}", "Lines:".bold(), network.active_edges().len());
        print_report(&report);

        let unreachable = report.unreachable();
        if !unreachable.is_empty() {
            println!(
                "{} {} house(s) cannot be reached from the station.",
                "WARNING:".bold().yellow(),
                unreachable.len()
            );
        }
    }
}
