use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{FeederError, FeederResult};

/// One feed endpoint. Priority comes from its position in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
}

impl Source {
    /// Build a source after checking the URL is an absolute http(s) URL
    pub fn parse(url: &str) -> FeederResult<Self> {
        let trimmed = url.trim();
        let parsed = Url::parse(trimmed)
            .map_err(|e| FeederError::InvalidUrl(format!("{}: {}", trimmed, e)))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(FeederError::InvalidUrl(format!(
                    "{}: unsupported scheme '{}'",
                    trimmed, other
                )))
            }
        }

        if parsed.host_str().is_none() {
            return Err(FeederError::InvalidUrl(format!("{}: missing host", trimmed)));
        }

        Ok(Self {
            url: trimmed.to_string(),
        })
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_https() {
        let source = Source::parse(" https://www.vogue.com/feed/rss ").unwrap();
        assert_eq!(source.url, "https://www.vogue.com/feed/rss");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Source::parse("not a url"),
            Err(FeederError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_http_scheme() {
        let err = Source::parse("ftp://example.com/feed").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }
}
