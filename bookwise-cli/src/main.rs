//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use bookwise_cli::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    match bookwise_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) if !err.use_stderr() => err.exit(),
        Err(err) => report_and_exit(&err),
    }
}

/// Route `log` records to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn report_and_exit(err: &CliError) -> ! {
    eprintln!("bookwise: {err}");
    std::process::exit(1);
}
