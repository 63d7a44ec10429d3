//! Paginated access to the vacancy search endpoint.

use reqwest::blocking::{Client, Request};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{Result, ScrapeError};
use crate::request::{SearchRequest, PAGE_SIZE};

/// Body of one search results page.
///
/// Items stay untyped here; they are decoded into `common::Vacancy`
/// during assembly so a bad record is reported as such.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPage {
    pub items: Vec<serde_json::Value>,
    #[serde(default)]
    pub found: Option<u64>,
    #[serde(default)]
    pub pages: Option<u32>,
}

/// Anything that can produce the raw pages for a search.
pub trait PageSource {
    /// Returns `request.page_count()` pages in ascending page order,
    /// or the first error encountered.
    fn fetch_pages(&self, request: &SearchRequest) -> Result<Vec<RawPage>>;
}

/// Blocking client for the HeadHunter vacancy search API.
pub struct HhClient {
    client: Client,
    config: ClientConfig,
}

impl HhClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ScrapeError::Client)?;

        info!(
            base_url = %config.base_url,
            area = %config.area,
            timeout_secs = config.timeout.as_secs(),
            "vacancy client ready"
        );
        Ok(Self { client, config })
    }

    fn page_request(&self, search_term: &str, page: u32) -> reqwest::Result<Request> {
        self.client
            .get(&self.config.base_url)
            .query(&[("text", search_term), ("area", self.config.area.as_str())])
            .query(&[("per_page", PAGE_SIZE), ("page", page)])
            .build()
    }

    fn fetch_page(&self, search_term: &str, page: u32) -> Result<RawPage> {
        let transport = |source: reqwest::Error| ScrapeError::Transport { page, source };

        let request = self.page_request(search_term, page).map_err(transport)?;
        debug!(url = %request.url(), "GET");

        let response = self.client.execute(request).map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::ApiStatus { page, status });
        }

        let body: RawPage = response.json().map_err(transport)?;
        info!(
            page,
            items = body.items.len(),
            found = body.found.unwrap_or_default(),
            total_pages = body.pages.unwrap_or_default(),
            "fetched page"
        );
        Ok(body)
    }
}

impl PageSource for HhClient {
    fn fetch_pages(&self, request: &SearchRequest) -> Result<Vec<RawPage>> {
        (0..request.page_count())
            .map(|page| self.fetch_page(&request.search_term, page))
            .collect()
    }
}
