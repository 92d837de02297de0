use clap::Parser;

use feeder::cli::{Cli, Commands};
use feeder::config::Config;
use feeder::errors::FeederResult;
use feeder::services::ArticleAggregator;
use feeder::sources::{HttpFeedFetcher, SourceRegistry};
use feeder::{logging, Article, ArticleMessage};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> FeederResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    logging::init(&config.log_filter);

    // Initialize source registry
    let registry = config.registry()?;

    match cli.command {
        Commands::Latest { count, json, plain } => {
            let fetcher = HttpFeedFetcher::new(&config.fetch_config())?;
            let aggregator = ArticleAggregator::new(registry, fetcher)
                .with_entries_per_source(config.entries_per_source);

            cmd_latest(&aggregator, count.unwrap_or(config.default_count), json, plain)
        }
        Commands::Sources => cmd_sources(&registry, config.entries_per_source),
    }
}

fn cmd_latest(
    aggregator: &ArticleAggregator<HttpFeedFetcher>,
    count: usize,
    json: bool,
    plain: bool,
) -> FeederResult<()> {
    let articles = aggregator.aggregate(count);

    if json {
        print_json(&articles)?;
        return Ok(());
    }

    if articles.is_empty() {
        println!("No articles found. Try again later.");
        return Ok(());
    }

    for article in &articles {
        let message = ArticleMessage::from_article(article);
        if plain {
            println!("{}\n", message.format_plain());
        } else {
            println!("{}\n", message.format());
        }
    }

    Ok(())
}

fn print_json(articles: &[Article]) -> FeederResult<()> {
    let json = serde_json::to_string_pretty(articles)?;
    println!("{}", json);
    Ok(())
}

fn cmd_sources(registry: &SourceRegistry, entries_per_source: usize) -> FeederResult<()> {
    if registry.is_empty() {
        println!("No feeds configured.");
        return Ok(());
    }

    println!("Configured feeds (priority order):\n");
    for (i, source) in registry.iter().enumerate() {
        println!("  {}. {}", i + 1, source);
    }
    println!("\nUp to {} articles per feed.", entries_per_source);

    Ok(())
}
