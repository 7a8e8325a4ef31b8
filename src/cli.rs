use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_OUTPUT};

/// Generate a Solidity diamond-upgrade script from a forge cut file.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input .json file containing `returns.cut.value`
    pub input: PathBuf,
    /// Output .sol file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.input).with_output(cli.output)
    }
}
