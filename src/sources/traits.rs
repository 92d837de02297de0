use crate::domain::{RawEntry, Source};
use crate::errors::FeederResult;

/// Retrieves one source and turns it into raw entries.
#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher: Send + Sync {
    /// Fetch `source` once, returning at most `limit` entries in document order.
    ///
    /// Any transport or parse failure comes back as an error value; callers
    /// decide what a failed source costs them.
    fn fetch(&self, source: &Source, limit: usize) -> FeederResult<Vec<RawEntry>>;
}
