use std::time::Duration;

use crate::error::{Result, ScrapeError};

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru/vacancies";
/// Russia.
pub const DEFAULT_AREA: &str = "113";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_BASE_URL: &str = "VACANCY_SCRAPER_BASE_URL";
const ENV_AREA: &str = "VACANCY_SCRAPER_AREA";
const ENV_TIMEOUT_SECS: &str = "VACANCY_SCRAPER_TIMEOUT_SECS";

/// Connection settings for the vacancy search API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub area: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            area: DEFAULT_AREA.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("vacancy-scraper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `VACANCY_SCRAPER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(area) = lookup(ENV_AREA) {
            config.area = area;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or_else(|| ScrapeError::Config {
                    var: ENV_TIMEOUT_SECS,
                    message: format!("expected a positive number of seconds, got {raw:?}"),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
