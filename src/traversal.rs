use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Extensions a candidate source file may carry; matching is case-sensitive.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "h"];

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// Expands one input path into the source files reachable from it.
///
/// Directories are walked with an explicit stack of pending paths, so
/// discovery order carries no meaning. Every entry is visited; files
/// without a recognized extension are silently skipped. Existence of a
/// plain-file input is not validated here — a missing `foo.cpp` passes
/// the extension check and fails later when the checker opens it.
///
/// # Errors
/// Returns an error if a visited directory cannot be read.
pub fn collect_source_files(input: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    let mut pending = vec![input.to_path_buf()];
    while let Some(current) = pending.pop() {
        if current.is_dir() {
            let entries = fs::read_dir(&current)
                .with_context(|| format!("read directory {}", current.display()))?;
            for entry in entries {
                let entry =
                    entry.with_context(|| format!("read directory {}", current.display()))?;
                pending.push(entry.path());
            }
        } else if is_source_file(&current) {
            out.push(current);
        }
    }
    Ok(out)
}
