use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use postbuild::cli::{Cli, Command};
use postbuild::output::OutputFormat;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Change working directory if --dir is specified
    if let Some(ref dir) = cli.dir {
        std::env::set_current_dir(dir)?;
    }

    let config_path = PathBuf::from(cli.config.as_deref().unwrap_or("postbuild.toml"));
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    match &cli.command {
        Command::Feed(args) => postbuild::cli::feed::run(args, &config_path, format)?,
        Command::Variants(args) => postbuild::cli::variants::run(args, &config_path, format)?,
    }

    Ok(())
}
