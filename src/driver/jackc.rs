//! Driver for the `jackc` binary: compiles every `.jack` file named by
//! its input path to `.vm`, and optionally to the token/parse-tree XML
//! dumps (spec.md §6).

use std::fs;
use std::path::Path;

use crate::diagnostics;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::xml;

use super::{basename, resolve_inputs};

/// Which optional dumps to emit alongside the required `.vm` output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JackcOptions {
    pub emit_tokens: bool,
    pub emit_tree: bool,
}

/// Compiles every `.jack` file named by `path`. Returns `true` if every
/// unit compiled without error; a failing unit is reported to stderr and
/// does not stop the remaining units from being attempted (spec.md §7).
pub fn run(path: &Path, options: JackcOptions) -> bool {
    let inputs = match resolve_inputs(path, "jack") {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            return false;
        }
    };

    let mut all_ok = true;
    for input in inputs {
        if !compile_one(&input, options) {
            all_ok = false;
        }
    }
    all_ok
}

fn compile_one(input: &Path, options: JackcOptions) -> bool {
    let filename = input.display().to_string();
    let source = match fs::read_to_string(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", filename, e);
            return false;
        }
    };

    let mut parser = Parser::new(&source);
    if options.emit_tree {
        parser = parser.with_tree();
    }

    let compiled = match parser.compile() {
        Ok(c) => c,
        Err(e) => {
            diagnostics::report_error(&filename, &source, &e);
            return false;
        }
    };

    let stem = basename(input);
    let dir = input.parent().unwrap_or_else(|| Path::new("."));

    if let Err(e) = fs::write(dir.join(format!("{}.vm", stem)), &compiled.vm_code) {
        eprintln!("{}: failed to write {}.vm: {}", filename, stem, e);
        return false;
    }

    if options.emit_tokens {
        match Lexer::new(&source).tokenize_all() {
            Ok(tokens) => {
                let xml_text = xml::tokens_to_xml(&tokens);
                if let Err(e) = fs::write(dir.join(format!("{}T.xml", stem)), xml_text) {
                    eprintln!("{}: failed to write {}T.xml: {}", filename, stem, e);
                    return false;
                }
            }
            Err(e) => {
                diagnostics::report_error(&filename, &source, &e.into());
                return false;
            }
        }
    }

    if options.emit_tree {
        let tree = compiled
            .tree
            .expect("with_tree() was requested, so compile() returns a tree");
        let xml_text = xml::node_to_xml(&tree);
        if let Err(e) = fs::write(dir.join(format!("{}.xml", stem)), xml_text) {
            eprintln!("{}: failed to write {}.xml: {}", filename, stem, e);
            return false;
        }
    }

    true
}
