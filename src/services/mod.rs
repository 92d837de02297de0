pub mod article_aggregator;

pub use article_aggregator::{ArticleAggregator, DEFAULT_ENTRIES_PER_SOURCE};
