use chrono::{DateTime, Utc};

/// One item as extracted from a parsed feed. Every field is best-effort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub raw_summary: Option<String>,
    pub source_title: Option<String>,
    pub published: Option<DateTime<Utc>>,
}

impl RawEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.raw_summary = Some(summary.into());
        self
    }

    pub fn with_source_title(mut self, source_title: Option<String>) -> Self {
        self.source_title = source_title;
        self
    }

    pub fn with_published(mut self, published: Option<DateTime<Utc>>) -> Self {
        self.published = published;
        self
    }
}
