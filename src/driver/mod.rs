//! Filesystem orchestration for the three CLIs.
//!
//! Out of scope for detailed design per spec.md §1 (the original's
//! `utils/Colouriser.*` and `utils/JackSourceFileUtilities.*` are
//! explicitly not reimplemented — SPEC_FULL.md §2), but still required
//! for the binaries to function: each submodule resolves one positional
//! path argument to either a single source file or every matching file
//! in a directory (non-recursive), and reports per-unit success so the
//! caller can pick an exit code (spec.md §7: "Exit code is 0 only if
//! every unit in a run completes without error").

pub mod hackasm;
pub mod jackc;
pub mod vmc;

use std::fs;
use std::path::{Path, PathBuf};

/// Lists every file directly inside `dir` whose extension matches
/// `extension`, in directory-iteration order — non-recursive, per
/// spec.md §6's "every `.jack`/`.vm` file within (non-recursive)".
fn files_with_extension(dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Resolves a CLI's positional path argument to the list of source
/// files it names: the file itself if it's a file, or every file with
/// `extension` directly inside it if it's a directory.
fn resolve_inputs(path: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    if path.is_dir() {
        files_with_extension(path, extension)
    } else {
        Ok(vec![path.to_path_buf()])
    }
}

/// The basename a translation unit's outputs and minted labels are keyed
/// by: the file stem, e.g. `Main` for `examples/Main.jack`.
fn basename(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}
