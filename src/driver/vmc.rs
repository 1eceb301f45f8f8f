//! Driver for the `vmc` binary: translates `.vm` files to Hack assembly
//! (spec.md §6), supplemented per SPEC_FULL.md §3 with both of the
//! original's output modes — one `.asm` per `.vm` file, or (behind
//! `--combine`) every `.vm` file under a directory concatenated into one
//! `.asm` with the bootstrap prepended once.

use std::fs;
use std::path::Path;

use crate::asmgen::{self, AsmEmitter};

use super::{basename, resolve_inputs};

#[derive(Debug, Clone, Copy, Default)]
pub struct VmcOptions {
    pub combine: bool,
}

pub fn run(path: &Path, options: VmcOptions) -> bool {
    if path.is_dir() && options.combine {
        combine_directory(path)
    } else {
        match resolve_inputs(path, "vm") {
            Ok(inputs) => {
                let mut all_ok = true;
                for input in inputs {
                    if !translate_one(&input) {
                        all_ok = false;
                    }
                }
                all_ok
            }
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                false
            }
        }
    }
}

fn translate_one(input: &Path) -> bool {
    let filename = input.display().to_string();
    let source = match fs::read_to_string(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", filename, e);
            return false;
        }
    };

    let unit_name = basename(input);
    match asmgen::translate(&source, &unit_name, false, true) {
        Ok(asm) => {
            let out_path = input.with_extension("asm");
            if let Err(e) = fs::write(&out_path, asm) {
                eprintln!("{}: failed to write {}: {}", filename, out_path.display(), e);
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

/// Concatenates every `.vm` file directly under `dir` into one `.asm`,
/// prepending the bootstrap once and appending the halt loop once
/// (SPEC_FULL.md §3/§5: bootstrap only when combining a directory).
fn combine_directory(dir: &Path) -> bool {
    let inputs = match resolve_inputs(dir, "vm") {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("{}: {}", dir.display(), e);
            return false;
        }
    };
    if inputs.is_empty() {
        eprintln!("{}: no .vm files found", dir.display());
        return false;
    }

    let program_name = basename(dir);
    let mut emitter = AsmEmitter::new(&program_name);
    emitter.emit_bootstrap_sp_init();
    emitter.emit_bootstrap_call(0);
    let mut combined = emitter.render();

    for input in &inputs {
        let filename = input.display().to_string();
        let source = match fs::read_to_string(input) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}: {}", filename, e);
                return false;
            }
        };
        let unit_name = basename(input);
        match asmgen::translate(&source, &unit_name, false, false) {
            Ok(asm) => combined.push_str(&asm),
            Err(e) => {
                eprintln!("{}: {}", filename, e);
                return false;
            }
        }
    }

    let mut trailer = AsmEmitter::new(&program_name);
    trailer.emit_infinite_loop();
    combined.push_str(&trailer.render());

    let out_path = dir.join(format!("{}.asm", program_name));
    if let Err(e) = fs::write(&out_path, combined) {
        eprintln!("{}: failed to write {}: {}", dir.display(), out_path.display(), e);
        return false;
    }
    true
}
