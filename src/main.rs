use clap::{Parser, ValueEnum};

use stochopt::application::reporter;
use stochopt::instances::{farmer, manufacturer};
use stochopt::{Model, SolverBackend, SolverFactory};

#[derive(Parser)]
#[command(name = "stochopt", about = "Solve the bundled resource-allocation instances")]
struct Cli {
    /// Problem instance to solve
    #[arg(value_enum)]
    instance: InstanceArg,

    /// Solver backend
    #[arg(long, value_enum, default_value = "auto")]
    backend: BackendArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum InstanceArg {
    /// Farmer land allocation, average yields
    Farmer,
    /// Farmer land allocation, good-weather yields
    FarmerHigh,
    /// Farmer land allocation under three yield scenarios
    FarmerTwoStage,
    /// Manufacturer batch planning at book prices
    Manufacturer,
    /// Manufacturer with capacity-expansion decisions
    ManufacturerExpansion,
    /// Manufacturer batch planning under three price scenarios
    ManufacturerTwoStage,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Auto,
    Microlp,
    Cbc,
    Highs,
}

impl From<BackendArg> for SolverBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Auto => SolverBackend::Auto,
            BackendArg::Microlp => SolverBackend::Microlp,
            BackendArg::Cbc => SolverBackend::CoinCbc,
            BackendArg::Highs => SolverBackend::Highs,
        }
    }
}

fn build_instance(instance: InstanceArg) -> Result<Model, stochopt::ModelError> {
    match instance {
        InstanceArg::Farmer => farmer::deterministic(1.0),
        InstanceArg::FarmerHigh => farmer::deterministic(1.2),
        InstanceArg::FarmerTwoStage => farmer::two_stage(),
        InstanceArg::Manufacturer => manufacturer::deterministic(),
        InstanceArg::ManufacturerExpansion => manufacturer::expansion(),
        InstanceArg::ManufacturerTwoStage => manufacturer::two_stage(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let model = build_instance(cli.instance)?;
    let solver = SolverFactory::create(cli.backend.into())?;

    println!("Solving '{}' using {}", model.name, solver.name());
    let result = solver.solve(&model)?;
    print!("{}", reporter::render(&model, &result));

    Ok(())
}
