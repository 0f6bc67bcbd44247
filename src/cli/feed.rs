use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::feed::generate_rss;
use crate::metadata;
use crate::output::{self, human, CommandOutput, OutputFormat};

#[derive(Args)]
pub struct FeedArgs {
    /// Metadata file to read instead of the configured one
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Write the feed to this path instead of the configured one
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct FeedStats {
    pub posts: usize,
    pub output: PathBuf,
}

impl CommandOutput for FeedStats {
    fn human_display(&self) -> String {
        format!(
            "Wrote {} post{} to {}",
            self.posts,
            if self.posts == 1 { "" } else { "s" },
            self.output.display()
        )
    }
}

pub fn run(args: &FeedArgs, config_path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = SiteConfig::load_or_default(config_path)?;
    let paths = config.resolve_paths(&cwd);

    let metadata_path = args.metadata.clone().unwrap_or(paths.metadata);
    let feed_path = args.output.clone().unwrap_or(paths.feed);

    let tree = metadata::load(&metadata_path)?;
    let posts = metadata::blog_posts(&tree, &metadata_path)?;
    if posts.is_empty() {
        human::info("No blog posts in metadata; writing an empty feed");
    }

    let xml = generate_rss(&config, &posts)?;

    if let Some(parent) = feed_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&feed_path, &xml)?;

    output::print_output(
        &FeedStats {
            posts: posts.len(),
            output: feed_path,
        },
        format,
    );
    Ok(())
}
