/// Failing and repairing lines one command at a time.
use super::*;

const HELP: &str = "\
Commands:
  remove   (f)  fail the line at the head of the active list
  restore  (r)  repair the most recently failed line
  reset         repair every line
  show     (s)  print the distances again
  edges    (e)  list active and failed lines
  help     (h)  print this message
  quit     (q)  exit";

fn print_edges(network: &Network) {
    println!("{:16}{:?}", "State:".bold(), network.state());
    println!("{}", "Active lines:".bold());
    for edge in network.active_edges() {
        println!("  {}", edge);
    }
    println!("{}", "Failed lines (oldest first):".bold());
    for edge in network.removed_edges() {
        println!("  {}", edge.to_string().red());
    }
}

impl Interactive {
    pub fn run(self) {
        let Interactive { path } = self;
        let (name, mut simulator) = load_simulator(path, None);

        println!("{:16}{}", "Network Name:".bold(), name);
        match simulator.report() {
            Ok(report) => print_report(&report),
            Err(err) => fatal_error!(1, "Cannot compute distances: {}", err),
        }
        println!("{}", HELP);

        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            print!("{} ", ">".bold());
            if let Err(e) = std::io::stdout().flush() {
                fatal_error!(1, "Cannot write to stdout: {}", e);
            }
            line.clear();
            match stdin.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => (),
                Err(e) => fatal_error!(1, "Cannot read from stdin: {}", e),
            }

            let step = match line.trim() {
                "" => continue,
                "remove" | "f" => simulator.apply(Operation::Remove),
                "restore" | "r" => simulator.apply(Operation::Restore),
                "reset" => simulator.apply(Operation::Reset),
                "show" | "s" => simulator.apply(Operation::Report),
                "edges" | "e" => {
                    print_edges(simulator.network());
                    continue;
                }
                "help" | "h" => {
                    println!("{}", HELP);
                    continue;
                }
                "quit" | "q" | "exit" => break,
                other => {
                    println!("Unknown command: {other}. Type 'help' for a list.");
                    continue;
                }
            };
            match step {
                Ok(step) => print_step(&step),
                Err(err) => fatal_error!(1, "Simulation failed: {}", err),
            }
        }
    }
}
