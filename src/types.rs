use std::path::PathBuf;

use serde::Serialize;

/// Why a checked file was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Formatter output differs from the file's current contents.
    ChangesWhenFormatted,
    /// Formatter exited non-zero; no content comparison was made.
    FormatterFailed { code: i32, command: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

impl CheckReport {
    pub fn message(&self) -> String {
        match &self.diagnostic {
            Diagnostic::ChangesWhenFormatted => {
                format!("{} changes when formatted.", self.path.display())
            }
            Diagnostic::FormatterFailed { code, command } => {
                format!("got exit code {code} when executing `{command}`")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub files_checked: usize,
    #[serde(rename = "needs_formatting")]
    pub flagged: Vec<CheckReport>,
}

impl RunSummary {
    pub fn needs_formatting(&self) -> bool {
        !self.flagged.is_empty()
    }
}
