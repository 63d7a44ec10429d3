//! Interactive entry point: asks for a vacancy name and amount,
//! fetches the matching vacancies and saves them to `{name}_{amount}.xlsx`.

use std::io;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use vacancy_scraper::{assemble, export, read_request, ClientConfig, HhClient, PAGE_SIZE};

fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the prompts.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    // Defaults plus VACANCY_SCRAPER_* overrides
    let config = ClientConfig::from_env().context("reading configuration")?;

    // Ask for vacancy name and amount
    let request = read_request(&mut io::stdin().lock(), &mut io::stdout())
        .context("reading search request")?;
    if request.page_count() == 0 {
        warn!(
            amount = request.amount,
            "amount is below one page of {PAGE_SIZE}; nothing will be fetched"
        );
    }
    info!(
        search_term = %request.search_term,
        pages = request.page_count(),
        "starting search"
    );

    // Fetch every page and flatten the vacancies
    let client = HhClient::new(config).context("setting up HTTP client")?;
    let rows = assemble(&client, &request).context("fetching and extracting vacancies")?;

    // Save to {name}_{amount}.xlsx in the working directory
    let path = request.output_file();
    export(&rows, &path).with_context(|| format!("exporting to {}", path.display()))?;

    println!(
        "💾 Successfully saved {} vacancies to {}",
        rows.len(),
        path.display()
    );
    Ok(())
}
