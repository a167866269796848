use anyhow::{Context, Result};
use clap::Parser;
use mucat::cli::Cli;
use mucat::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    let config = Config::from_cli(&cli)?;
    mucat::run(&config).context("Console I/O failed")
}
