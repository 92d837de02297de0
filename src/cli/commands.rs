use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fashion-feeder")]
#[command(about = "Fetches the freshest fashion articles from a prioritized list of feeds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the latest articles, trying feeds in priority order
    Latest {
        /// Number of articles to return (defaults to FEEDER_DEFAULT_COUNT or 2)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Print articles as JSON instead of formatted messages
        #[arg(long, conflicts_with = "plain")]
        json: bool,

        /// Print only title and link for each article
        #[arg(long)]
        plain: bool,
    },

    /// List configured feeds in priority order
    Sources,
}
