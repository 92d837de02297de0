use tracing::{debug, error, info, warn};

use crate::domain::Article;
use crate::sources::{FeedFetcher, SourceRegistry};

/// Entries taken from each source before moving on
pub const DEFAULT_ENTRIES_PER_SOURCE: usize = 3;

/// Walks the registry in priority order and collects cleaned articles
/// until the requested count is reached.
pub struct ArticleAggregator<F: FeedFetcher> {
    registry: SourceRegistry,
    fetcher: F,
    entries_per_source: usize,
}

impl<F: FeedFetcher> ArticleAggregator<F> {
    pub fn new(registry: SourceRegistry, fetcher: F) -> Self {
        Self {
            registry,
            fetcher,
            entries_per_source: DEFAULT_ENTRIES_PER_SOURCE,
        }
    }

    pub fn with_entries_per_source(mut self, entries_per_source: usize) -> Self {
        self.entries_per_source = entries_per_source;
        self
    }

    /// Collect up to `n` articles.
    ///
    /// Sources are tried strictly in registry order and the walk stops the
    /// moment `n` articles are held, even in the middle of a source. A source
    /// that fails contributes nothing; its error is logged and never returned.
    pub fn aggregate(&self, n: usize) -> Vec<Article> {
        let mut articles = Vec::with_capacity(n.min(64));

        if n == 0 {
            return articles;
        }

        'sources: for source in &self.registry {
            info!("Fetching articles from {}", source.url);

            let entries = match self.fetcher.fetch(source, self.entries_per_source) {
                Ok(entries) => entries,
                Err(e) if e.is_source_failure() => {
                    warn!(source = %source.url, error = %e, "Skipping source");
                    continue;
                }
                Err(e) => {
                    error!(source = %source.url, error = %e, "Skipping source after unexpected error");
                    continue;
                }
            };

            for entry in entries.into_iter().take(self.entries_per_source) {
                let article = Article::from_entry(entry);
                debug!("Collected '{}' from {}", article.title, article.source);
                articles.push(article);

                if articles.len() >= n {
                    break 'sources;
                }
            }
        }

        info!("Collected {} of {} requested articles", articles.len(), n);
        articles
    }
}
