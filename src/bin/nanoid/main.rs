use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Print a new random, URL-safe identifier.
///
/// Set `RUST_LOG=nanoid=debug` to see how the identifier was sampled.
#[derive(Parser)]
#[command(version)]
struct Args {}

fn run() -> Result<(), ProgError> {
    let Args {} = Args::parse();

    let id = nanoid::generate_default()?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{id}").context("failed to write the identifier to stdout")?;
    Ok(())
}

fn main() {
    init_tracing();

    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Failed to generate an identifier: {0}")]
    Generate(nanoid::IdError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<nanoid::IdError> for ProgError {
    fn from(err: nanoid::IdError) -> ProgError {
        ProgError::Generate(err)
    }
}
