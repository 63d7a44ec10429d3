use std::io::{BufRead, Write};

use crate::error::{Result, ScrapeError};
use crate::request::SearchRequest;

/// Asks for the vacancy name and amount, one line each.
pub fn read_request(input: &mut impl BufRead, output: &mut impl Write) -> Result<SearchRequest> {
    let search_term = ask(input, output, "Please enter vacancy name:")?;
    let amount = parse_amount(&ask(input, output, "Please enter amount:")?)?;
    Ok(SearchRequest::new(search_term, amount))
}

pub fn parse_amount(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| ScrapeError::InvalidAmount(raw.to_string()))
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<String> {
    writeln!(output, "{question}").map_err(ScrapeError::Prompt)?;
    output.flush().map_err(ScrapeError::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(ScrapeError::Prompt)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
