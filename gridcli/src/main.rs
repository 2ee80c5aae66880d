use clap::Parser;
use colored::Colorize;

use gridlib::io::{NetworkFile, Scenario};
use gridlib::*;

use std::io::Write;
use std::path::PathBuf;

/// Print an error message in bold red and exit with the given code.
macro_rules! fatal_error {
    ($code:expr, $($arg:tt)*) => {{
        eprintln!("{} {}", "ERROR:".bold().red(), format!($($arg)*));
        std::process::exit($code)
    }};
}

mod commands;
use commands::*;

/// Simulate line failures on a distribution network and report the cheapest path from the
/// power station to every house.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    cli.command.run();
}
