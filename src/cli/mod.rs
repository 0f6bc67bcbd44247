pub mod feed;
pub mod variants;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "postbuild",
    about = "Post-build helpers for a static site: RSS feed and page variants",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Project directory
    #[arg(short, long, global = true)]
    pub dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the RSS feed from the site metadata
    Feed(feed::FeedArgs),

    /// Split variant-tagged pages into sibling documents
    Variants(variants::VariantsArgs),
}
