//! `jackc` — compiles Jack source into VM instructions (spec.md §6).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hackc::driver::jackc::{self, JackcOptions};

/// Compiles a `.jack` file, or every `.jack` file in a directory, to VM
/// instructions.
#[derive(Parser)]
#[command(name = "jackc", version, about)]
struct Cli {
    /// Path to a `.jack` file or a directory of them.
    path: PathBuf,

    /// Also emit `<basename>T.xml`, a token-stream dump.
    #[arg(long)]
    tokens: bool,

    /// Also emit `<basename>.xml`, a parse-tree dump.
    #[arg(long)]
    tree: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = JackcOptions {
        emit_tokens: cli.tokens,
        emit_tree: cli.tree,
    };

    if jackc::run(&cli.path, options) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
