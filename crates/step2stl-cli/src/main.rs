//! step2stl - convert a STEP model to a binary STL mesh.
//!
//! Paths are resolved relative to the directory the binary lives in, so
//! the tool can sit next to its data and be run from anywhere. All
//! user-facing output goes to stdout; the exit code is 0 on success and
//! 1 on any failure.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use step2stl::{
    convert, ConvertConfig, ConvertError, ConvertEvent, MeshTolerances, TruckKernel,
    DEFAULT_ANGULAR_TOLERANCE, DEFAULT_INPUT_PATH, DEFAULT_LINEAR_TOLERANCE, DEFAULT_OUTPUT_PATH,
};

#[derive(Parser)]
#[command(name = "step2stl")]
#[command(about = "Convert a STEP model to a binary STL mesh", long_about = None)]
struct Cli {
    /// Input STEP file (relative paths are resolved against the tool's directory)
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output STL file (parent directory is created if missing)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Maximum chordal deviation of the mesh, in model units
    #[arg(long, default_value_t = DEFAULT_LINEAR_TOLERANCE)]
    tolerance: f64,

    /// Maximum angular deviation of the mesh, in radians
    #[arg(long, default_value_t = DEFAULT_ANGULAR_TOLERANCE)]
    angular_tolerance: f64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = ConvertConfig {
        input: cli.input,
        output: cli.output,
        tolerances: MeshTolerances::new(cli.tolerance, cli.angular_tolerance),
    };
    log::debug!("configuration: {config:?}");

    match convert(&TruckKernel::new(), &config, print_progress) {
        Ok(_) => {
            println!("Conversion successful!");
            ExitCode::SUCCESS
        }
        Err(ConvertError::MissingInput(path)) => {
            println!("Error: Input file not found at {}", path.display());
            ExitCode::FAILURE
        }
        Err(ConvertError::Conversion(err)) => {
            println!("An error occurred during conversion: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_progress(event: ConvertEvent) {
    match event {
        ConvertEvent::ReadingInput(path) => println!("Reading STEP file: {}...", path.display()),
        ConvertEvent::CreatedDir(path) => println!("Created directory: {}", path.display()),
        ConvertEvent::WritingOutput(path) => println!("Writing STL file: {}...", path.display()),
    }
}
