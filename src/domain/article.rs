use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cleaner;
use crate::domain::RawEntry;

/// Stand-in summary for entries that carry none
pub const MISSING_SUMMARY: &str = "No description";

/// Stand-in source name for feeds without a declared title
pub const UNKNOWN_SOURCE: &str = "Unknown source";

pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
}

impl Article {
    /// Build the public article from a raw entry, substituting defaults
    /// for anything the feed left out and cleaning the summary.
    pub fn from_entry(entry: RawEntry) -> Self {
        let raw_summary = entry
            .raw_summary
            .unwrap_or_else(|| MISSING_SUMMARY.to_string());

        Self {
            title: entry.title.unwrap_or_else(|| UNTITLED.to_string()),
            link: entry.link.unwrap_or_default(),
            summary: cleaner::clean(&raw_summary),
            source: entry
                .source_title
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            published: entry.published,
        }
    }
}
