use common::{ExtractedRow, Vacancy};
use tracing::info;

use crate::error::{Result, ScrapeError};
use crate::fetch::PageSource;
use crate::request::SearchRequest;

/// Fetches every page for `request` and turns each item into a row,
/// keeping the API's order. The first bad item aborts the whole run.
pub fn assemble(source: &impl PageSource, request: &SearchRequest) -> Result<Vec<ExtractedRow>> {
    let pages = source.fetch_pages(request)?;
    let mut rows = Vec::with_capacity(pages.iter().map(|p| p.items.len()).sum());

    for (page, raw) in (0u32..).zip(pages) {
        for (item, value) in raw.items.into_iter().enumerate() {
            let vacancy = Vacancy::from_value(value)
                .map_err(|source| ScrapeError::Schema { page, item, source })?;
            rows.push(ExtractedRow::from_vacancy(vacancy));
        }
    }

    info!(
        search_term = %request.search_term,
        rows = rows.len(),
        "assembled vacancies"
    );
    Ok(rows)
}
