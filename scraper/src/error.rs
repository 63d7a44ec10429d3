use std::path::PathBuf;

/// Everything that can abort a scrape run.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("amount must be a non-negative integer, got {0:?}")]
    InvalidAmount(String),

    #[error("could not read input: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("invalid value for {var}: {message}")]
    Config { var: &'static str, message: String },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request for page {page} failed: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("page {page} returned HTTP {status}")]
    ApiStatus {
        page: u32,
        status: reqwest::StatusCode,
    },

    #[error("item {item} on page {page}: {source}")]
    Schema {
        page: u32,
        item: usize,
        #[source]
        source: common::SchemaError,
    },

    #[error("could not build workbook: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
