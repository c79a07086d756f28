//! The main entry point for the `re` command-line application.

use anyhow::{Context, Result};
use re::cli;
use re::config::Config;
use re::walker;
use std::io::{self, Write};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::parse_args();
    let config = Config::from_args(args).context("Invalid arguments")?;
    log::debug!("Resolved config: {config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    walker::run(&config, &mut out).context("Replacement run failed")?;
    out.flush()?;

    Ok(())
}
