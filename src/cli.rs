use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueHint};

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(name = "fmtcheck", version, about = "Checks the given inputs for code style changes", long_about = None)]
pub struct Args {
    /// Files or directories to check
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub inputs: Vec<PathBuf>,

    /// The clang-format executable to use
    #[arg(
        short = 'c',
        long = "clang-format",
        value_name = "EXE",
        default_value = "clang-format"
    )]
    pub clang_format: String,

    /// Output JSON instead of plain diagnostics
    #[arg(long = "json", action = ArgAction::SetTrue)]
    pub json: bool,

    /// Set rayon thread pool size (0 = default)
    #[arg(long = "threads", value_name = "N", default_value_t = 0)]
    pub threads: usize,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,

    /// Show a progress bar
    #[arg(long = "progress", action = ArgAction::SetTrue)]
    pub progress: bool,
}

/// Runs the CLI application. Returns whether any checked file needs
/// formatting, so `main` can map it to the exit status.
///
/// # Errors
/// Returns an error if a candidate file cannot be read or the formatter
/// cannot be spawned.
pub fn run() -> Result<bool> {
    // Exit code 2 is reserved for "needs formatting", so usage errors must
    // not use clap's default exit code.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    run_impl::run_with_args(&args)
}
