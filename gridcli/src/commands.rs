use super::*;

mod interactive;
pub use interactive::*;

mod report;
pub use report::*;

mod run;
pub use run::*;

/// All CLI commands available in this binary.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the distances of an intact network.
    #[command(alias = "d")]
    Report(Report),

    /// Replay a scenario file.
    #[command(alias = "r")]
    Run(Run),

    /// Fail and repair lines from the keyboard.
    #[command(alias = "i")]
    Interactive(Interactive),
}

#[derive(clap::Args, Debug)]
pub struct Report {
    /// Path to the network file (JSON or YAML). The demo network is used if omitted.
    path: Option<PathBuf>,
    /// Measure distances from this vertex instead of the power station.
    #[arg(short, long)]
    source: Option<VertexIndex>,
    /// Print the results as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(clap::Args, Debug)]
pub struct Run {
    /// Path to the scenario JSON file.
    path: PathBuf,
    /// Print the results as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(clap::Args, Debug)]
pub struct Interactive {
    /// Path to the network file (JSON or YAML). The demo network is used if omitted.
    path: Option<PathBuf>,
}

impl Command {
    pub fn run(self) {
        match self {
            Command::Report(args) => args.run(),
            Command::Run(args) => args.run(),
            Command::Interactive(args) => args.run(),
        }
    }
}

/// Read the network at `path`, or the demo network, and build a simulator for it.
fn load_simulator(path: Option<PathBuf>, source: Option<VertexIndex>) -> (String, Simulator) {
    let mut file = match path {
        Some(path) => match NetworkFile::read_from_file(&path) {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot read network {}: {}", path.display(), err),
        },
        None => gridlib::io::demo_network(),
    };
    if source.is_some() {
        file.source = source;
    }
    let name = file.name.take().unwrap_or_else(|| "-".to_string());
    let (network, config) = match file.prepare() {
        Ok(x) => x,
        Err(err) => fatal_error!(1, "Error while parsing network: {}", err),
    };
    let simulator = match Simulator::new(network, config) {
        Ok(x) => x,
        Err(err) => fatal_error!(1, "Cannot start simulation: {}", err),
    };
    (name, simulator)
}

/// Print a distance report with colors: unreachable houses in red.
fn print_report(report: &DistanceReport) {
    println!("{}", format!("Optimal paths from vertex {}:", report.source).bold());
    for entry in report.entries.iter() {
        match report.path_to(entry.vertex) {
            Some(path) => {
                let route = path
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                println!("  {:<36}{}", entry.to_string(), route.dimmed())
            }
            None => println!("  {}", entry.to_string().bold().red()),
        }
    }
}

/// Print the touched line and the recomputed report of a step.
fn print_step(step: &StepOutcome) {
    match (step.operation, step.edge, &step.failure) {
        (_, _, Some(failure)) => println!("{} {}", "REFUSED:".bold().yellow(), failure),
        (Operation::Remove, Some(edge), None) => {
            println!("{} {}", "Line removed:".bold().red(), edge)
        }
        (Operation::Restore, Some(edge), None) => {
            println!("{} {}", "Line restored:".bold().green(), edge)
        }
        (Operation::Reset, _, None) => println!("{}", "Network reset.".bold().green()),
        _ => (),
    }
    print_report(&step.report);
}

fn print_json<T: serde::Serialize>(value: &T) {
    let serialized = match serde_json::to_string_pretty(value) {
        Ok(s) => s,
        Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
    };
    println!("{}", serialized);
}
