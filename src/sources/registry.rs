use crate::domain::Source;
use crate::errors::FeederResult;

/// Built-in feeds, highest priority first
pub const DEFAULT_FEEDS: &[&str] = &[
    "https://www.vogue.com/feed/rss",
    "https://www.harpersbazaar.com/feed/rss",
    "https://www.elle.com/feed/rss",
    "https://www.gq.com/feed/rss",
];

/// Ordered, read-only list of feed sources. Position is priority.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRegistry {
    sources: Vec<Source>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self {
            sources: DEFAULT_FEEDS
                .iter()
                .map(|url| Source {
                    url: url.to_string(),
                })
                .collect(),
        }
    }

    /// Build a registry from configured URLs, keeping their order
    pub fn from_urls<I, S>(urls: I) -> FeederResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sources = urls
            .into_iter()
            .map(|url| Source::parse(url.as_ref()))
            .collect::<FeederResult<Vec<_>>>()?;

        Ok(Self { sources })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<'a> IntoIterator for &'a SourceRegistry {
    type Item = &'a Source;
    type IntoIter = std::slice::Iter<'a, Source>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.iter()
    }
}
