use fmtcheck::cli;

fn main() {
    // "needs formatting" gets its own exit code so hook scripts can tell
    // it apart from hard failures.
    match cli::run() {
        Ok(needs_formatting) => {
            if needs_formatting {
                std::process::exit(2);
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
