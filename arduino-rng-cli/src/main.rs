use anyhow::{Context, Result};
use arduino_rng_cli::{execute, Cli};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::debug!("Command: {:?}", cli.command);
    if cli.strict {
        log::info!("Strict validation enabled");
    }

    let output = execute(&cli).context("Command failed")?;
    println!("{}", output);

    Ok(())
}
