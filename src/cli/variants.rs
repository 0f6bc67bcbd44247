use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::SiteConfig;
use crate::output::{self, human, OutputFormat};
use crate::variants;

#[derive(Args)]
pub struct VariantsArgs {
    /// Output directory to scan instead of the configured one
    #[arg(long)]
    pub dist: Option<PathBuf>,
}

pub fn run(args: &VariantsArgs, config_path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = SiteConfig::load_or_default(config_path)?;
    let paths = config.resolve_paths(&cwd);

    let dist = args.dist.clone().unwrap_or(paths.output);
    if !dist.is_dir() {
        anyhow::bail!("output directory not found: {}", dist.display());
    }

    let stats = variants::split_tree(&dist)?;
    if stats.errors > 0 {
        human::warning(&format!(
            "{} file{} could not be processed; see log output",
            stats.errors,
            if stats.errors == 1 { "" } else { "s" }
        ));
    }
    output::print_output(&stats, format);
    Ok(())
}
