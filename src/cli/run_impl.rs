use std::io;

use anyhow::Result;
use clap::CommandFactory;
use rayon::prelude::*;

use crate::types::{CheckReport, RunSummary};
use crate::{checker, report, traversal};

use super::Args;

pub fn run_with_args(args: &Args) -> Result<bool> {
    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .ok();
    }

    if args.inputs.is_empty() {
        // Vacuous pass: nothing to check, but remind the caller how to
        // invoke us. Help goes to stderr so stdout stays empty.
        let _ = Args::command().write_help(&mut io::stderr());
        return Ok(false);
    }

    let mut files = Vec::new();
    for input in &args.inputs {
        let found = traversal::collect_source_files(input)?;
        if args.verbose > 1 {
            eprintln!("{}: {} candidate files", input.display(), found.len());
        }
        files.extend(found);
    }
    if args.verbose > 0 {
        eprintln!("Checking {} files with `{}`", files.len(), args.clang_format);
    }

    // Progress setup
    let pb = if args.progress {
        let pb = indicatif::ProgressBar::new(files.len() as u64);
        pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner} {pos}/{len} files {wide_bar} {eta}")
                .unwrap()
                .tick_chars("⠁⠃⠇⠋⠙⠸⢰⣠⣄⡆"),
        );
        Some(pb)
    } else {
        None
    };

    // Checks are independent per file; a read or spawn failure anywhere
    // aborts the whole run. Printing happens on this thread afterwards so
    // one file's report never interleaves with another's.
    let checked: Vec<Option<CheckReport>> = files
        .par_iter()
        .map(|path| {
            let diagnostic = checker::check_file(path, &args.clang_format)?;
            if let Some(ref pb) = pb {
                pb.inc(1);
            }
            Ok(diagnostic.map(|diagnostic| CheckReport {
                path: path.clone(),
                diagnostic,
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let summary = RunSummary {
        files_checked: files.len(),
        flagged: checked.into_iter().flatten().collect(),
    };

    if args.json {
        let s = serde_json::to_string_pretty(&summary)?;
        println!("{}", s);
    } else {
        report::print_flagged(&summary.flagged);
    }

    Ok(summary.needs_formatting())
}
