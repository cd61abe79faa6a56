use clap::Parser;
use tracing_subscriber::EnvFilter;

use byteunits::cli;
use byteunits::cli::Args;

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
