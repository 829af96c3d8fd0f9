//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    init_logging();
    if let Err(err) = happyspot_cli::run() {
        eprintln!("happyspot: {err}");
        std::process::exit(1);
    }
}

/// Send library `log` records to stderr, filtered by `RUST_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = subscriber.try_init() {
        eprintln!("happyspot: logging disabled: {err}");
    }
}
