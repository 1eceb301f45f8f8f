//! Driver for the `hackasm` binary: assembles a single `.asm` file into
//! its `.hack` machine-code text (spec.md §6).

use std::fs;
use std::path::Path;

use crate::assembler;

pub fn run(path: &Path) -> bool {
    let filename = path.display().to_string();
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", filename, e);
            return false;
        }
    };

    match assembler::assemble(&source) {
        Ok(hack) => {
            let out_path = path.with_extension("hack");
            if let Err(e) = fs::write(&out_path, hack) {
                eprintln!(
                    "{}: failed to write {}: {}",
                    filename,
                    out_path.display(),
                    e
                );
                false
            } else {
                true
            }
        }
        Err(e) => {
            eprintln!("{}: {}", filename, e);
            false
        }
    }
}
