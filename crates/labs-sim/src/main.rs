use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    compare::{self, CompareArgs},
    doctor::{self, DoctorArgs},
    energy::{self, EnergyArgs},
    solve::{self, SolveArgs},
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "labs-sim", about = "Low autocorrelation binary sequence search CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the energy of one sequence.
    Energy(EnergyArgs),
    /// Run the solver once and print its report.
    Solve(SolveArgs),
    /// Run baseline and seeded strategies side by side.
    Compare(CompareArgs),
    /// Report backend availability.
    Doctor(DoctorArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout stays machine readable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Energy(args) => energy::run(&args),
        Command::Solve(args) => solve::run(&args),
        Command::Compare(args) => compare::run(&args),
        Command::Doctor(args) => doctor::run(&args),
    }
}
