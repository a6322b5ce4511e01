use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::types::Diagnostic;

/// Determines whether `path` would change under the formatter.
///
/// Runs `<formatter> <path>` and compares the captured stdout
/// byte-for-byte against the file's current contents. `None` means the
/// file is already formatted. A non-zero formatter exit is reported as a
/// per-file diagnostic rather than a hard failure, since it usually means
/// the file itself cannot be parsed.
///
/// # Errors
/// Returns an error if the file cannot be read or the formatter cannot be
/// spawned; both abort the whole run.
pub fn check_file(path: &Path, formatter: &str) -> Result<Option<Diagnostic>> {
    let original =
        fs::read(path).with_context(|| format!("open source file {}", path.display()))?;

    // Argument-vector spawn; stderr stays on the terminal like the
    // formatter was run by hand.
    let output = Command::new(formatter)
        .arg(path)
        .stderr(Stdio::inherit())
        .output()
        .with_context(|| format!("spawn formatter `{formatter}`"))?;

    if !output.status.success() {
        return Ok(Some(Diagnostic::FormatterFailed {
            // None when killed by a signal
            code: output.status.code().unwrap_or(-1),
            command: format!("{} {}", formatter, path.display()),
        }));
    }

    if output.stdout != original {
        return Ok(Some(Diagnostic::ChangesWhenFormatted));
    }
    Ok(None)
}
