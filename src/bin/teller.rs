use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use teller::bin_utils::Service;
use tracing_subscriber::EnvFilter;

/// Replay an ATM command session and print the transaction transcript.
#[derive(Parser)]
#[command(name = "teller")]
struct Args {
    /// Session script; reads stdin when omitted
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    // diagnostics go to stderr so stdout stays a clean transcript
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let mut stdout = std::io::stdout();
    match args.input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open `{}`", path.display()))?;
            Service { input: file, output: &mut stdout }.run()
        }
        None => Service { input: std::io::stdin().lock(), output: &mut stdout }.run(),
    }
}
