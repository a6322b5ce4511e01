use std::io::IsTerminal;

use crate::types::CheckReport;

/// Prints one header + diagnostic pair per flagged file. The caller runs
/// this on a single thread, so reports never interleave.
pub fn print_flagged(flagged: &[CheckReport]) {
    let colors = Colors::enabled();
    for report in flagged {
        let header = format!("File {} needs formatting", report.path.display());
        println!("{}", colors.paint(&header, "1;33"));
        println!("{}", report.message());
    }
}

struct Colors {
    enabled: bool,
}

impl Colors {
    fn enabled() -> Self {
        let force = std::env::var("CLICOLOR_FORCE")
            .ok()
            .filter(|v| v != "0")
            .is_some();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let clicolor_zero = std::env::var("CLICOLOR")
            .ok()
            .map(|v| v == "0")
            .unwrap_or(false);
        let term = std::io::stdout().is_terminal();
        let enabled = if force {
            true
        } else if no_color || clicolor_zero {
            false
        } else {
            term
        };
        Colors { enabled }
    }

    fn paint(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, s)
        } else {
            s.to_string()
        }
    }
}
