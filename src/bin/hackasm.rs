//! `hackasm` — assembles Hack assembly into 16-bit machine code
//! (spec.md §6).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hackc::driver::hackasm;

/// Assembles a single `.asm` file into its `.hack` machine-code text.
#[derive(Parser)]
#[command(name = "hackasm", version, about)]
struct Cli {
    /// Path to the `.asm` file to assemble.
    path: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if hackasm::run(&cli.path) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
