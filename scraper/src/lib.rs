//! HeadHunter vacancy scraper
//!
//! Pulls vacancy search results page by page, flattens each vacancy
//! into a fixed 12-column row and saves the table as an `.xlsx` file.

pub mod assemble;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod prompt;
pub mod request;

#[cfg(test)]
mod test_support;

pub use assemble::assemble;
pub use config::ClientConfig;
pub use error::{Result, ScrapeError};
pub use export::export;
pub use fetch::{HhClient, PageSource, RawPage};
pub use prompt::read_request;
pub use request::{SearchRequest, PAGE_SIZE};
