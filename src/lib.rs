pub mod cleaner;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod services;
pub mod sources;

pub use domain::{Article, ArticleMessage, RawEntry, Source};
pub use errors::{FeederError, FeederResult};
pub use services::ArticleAggregator;
pub use sources::{FeedFetcher, HttpFeedFetcher, SourceRegistry};
