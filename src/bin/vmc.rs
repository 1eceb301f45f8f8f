//! `vmc` — translates VM instructions into Hack assembly (spec.md §6).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hackc::driver::vmc::{self, VmcOptions};

/// Translates a `.vm` file, or every `.vm` file in a directory, into
/// Hack assembly.
#[derive(Parser)]
#[command(name = "vmc", version, about)]
struct Cli {
    /// Path to a `.vm` file or a directory of them.
    path: PathBuf,

    /// When `path` is a directory, concatenate every `.vm` file into one
    /// `.asm` with the bootstrap prepended, instead of one `.asm` per
    /// input file.
    #[arg(long)]
    combine: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = VmcOptions {
        combine: cli.combine,
    };

    if vmc::run(&cli.path, options) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
