mod cli;
mod commands;
mod config;
mod logging;

use std::{fs, process};

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::Settings;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = Settings::from_cli(&cli)?;

    let rendered = match &cli.command {
        Command::Difference { first, second } => commands::difference(first, second, &cfg)?,
        Command::Since { date } => commands::since(date, &cfg)?,
        Command::Age { birth } => commands::age(birth, &cfg)?,
        Command::Format { date, format } => commands::format(date, format, &cfg)?,
        Command::Calendar { month } => commands::calendar(month, &cfg)?,
        Command::Moon { month, daily } => commands::moon(month, *daily, &cfg)?,
    };

    match &cfg.path {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Generated {} successfully.", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
