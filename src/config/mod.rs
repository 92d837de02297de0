use std::time::Duration;

use crate::errors::{FeederError, FeederResult};
use crate::services::DEFAULT_ENTRIES_PER_SOURCE;
use crate::sources::rss_atom::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::sources::{FetchConfig, SourceRegistry};

pub const DEFAULT_ARTICLE_COUNT: usize = 2;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    /// Configured feed URLs; `None` means the built-in list
    pub sources: Option<Vec<String>>,
    pub entries_per_source: usize,
    pub default_count: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sources: None,
            entries_per_source: DEFAULT_ENTRIES_PER_SOURCE,
            default_count: DEFAULT_ARTICLE_COUNT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FeederResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, applying defaults for missing keys
    pub fn from_lookup<L>(lookup: L) -> FeederResult<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let sources = lookup("FEEDER_SOURCES").map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        let entries_per_source = parse_positive(&lookup, "FEEDER_ENTRIES_PER_SOURCE")?
            .unwrap_or(defaults.entries_per_source);

        let default_count = match lookup("FEEDER_DEFAULT_COUNT") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                FeederError::Config(format!("FEEDER_DEFAULT_COUNT must be a number, got '{}'", raw))
            })?,
            None => defaults.default_count,
        };

        let timeout_secs = parse_positive(&lookup, "FEEDER_TIMEOUT_SECS")?
            .map(|secs| secs as u64)
            .unwrap_or(defaults.timeout_secs);

        let user_agent = lookup("FEEDER_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        let log_filter = lookup("FEEDER_LOG").unwrap_or(defaults.log_filter);

        Ok(Self {
            sources,
            entries_per_source,
            default_count,
            timeout_secs,
            user_agent,
            log_filter,
        })
    }

    /// Registry for this config, validating any configured URLs
    pub fn registry(&self) -> FeederResult<SourceRegistry> {
        match &self.sources {
            Some(urls) => SourceRegistry::from_urls(urls),
            None => Ok(SourceRegistry::new()),
        }
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

fn parse_positive<L>(lookup: &L, key: &str) -> FeederResult<Option<usize>>
where
    L: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(FeederError::Config(format!(
            "{} must be a positive number, got '{}'",
            key, raw
        ))),
    }
}
