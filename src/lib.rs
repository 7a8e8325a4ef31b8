pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;

pub use config::Config;
pub use error::{Error, ParseError};

pub fn run() -> anyhow::Result<()> {
    let config: Config = cli::Cli::parse().into();
    generate(&config)?;

    println!("Successfully wrote script to {}", config.output.display());
    Ok(())
}

/// Load, parse, render and write one cut. Nothing is written unless every
/// earlier step succeeded.
pub fn generate(config: &Config) -> anyhow::Result<()> {
    // 1. ── Load ───────────────────────────────────────────────────────
    let raw = parser::load(&config.input)
        .with_context(|| format!("Loading {}", config.input.display()))?;

    // 2. ── Parse ──────────────────────────────────────────────────────
    let processed = processor::run(&raw)
        .with_context(|| format!("Parsing cut in {}", config.input.display()))?;

    // 3. ── Render ─────────────────────────────────────────────────────
    let script = writer::solidity::render(&processed, &config.input);

    // 4. ── Write ──────────────────────────────────────────────────────
    writer::emit(&script, &config.output).with_context(|| "Writing Solidity script")?;

    Ok(())
}
