//! timebase - command-line base converter
//!
//! Usage: `timebase <value> <source_base> <out_base>`
//!
//! Uses `BASE_ALPHABET` from the environment when set.

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use timebase::{convert_base_with, Config};

fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timebase=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    let alphabet = config
        .alphabet()
        .context("BASE_ALPHABET cannot be used")?;
    debug!(symbols = alphabet.len(), "Alphabet loaded");

    let converted = convert_base_with(&cli.value, cli.source_base, cli.out_base, &alphabet)
        .with_context(|| format!("cannot convert {:?}", cli.value))?;
    debug!(
        source_base = cli.source_base,
        out_base = cli.out_base,
        "Converted value"
    );

    println!("{}", converted);
    Ok(())
}
