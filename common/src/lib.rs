//! Shared vacancy model
//!
//! Typed view of a single HeadHunter vacancy record, the flat row it is
//! exported as, and the two field extractors for its optional blocks.

use serde::{Deserialize, Serialize};

/// Spreadsheet header. `ExtractedRow::cells` yields values in this order.
pub const COLUMNS: [&str; 12] = [
    "Job Title",
    "Company Name",
    "Salary From",
    "Salary To",
    "Region",
    "Full Address",
    "Apply URL",
    "Vacancy URL",
    "Publication Time",
    "Archived",
    "Requirements",
    "Responsibilities",
];

/// A vacancy item that does not have the expected shape,
/// e.g. a required key is missing.
#[derive(Debug, thiserror::Error)]
#[error("malformed vacancy record: {0}")]
pub struct SchemaError(#[from] serde_json::Error);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub raw: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employer {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
}

/// Highlighted excerpts of the vacancy text.
/// Both keys are always sent, but either can be `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(deserialize_with = "Option::deserialize")]
    pub requirement: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub responsibility: Option<String>,
}

/// One item of the `items` array returned by the vacancy search endpoint.
///
/// `salary` and `address` may be absent or `null`; every other field
/// is required and its absence fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    pub name: String,
    pub employer: Employer,
    pub salary: Option<Salary>,
    pub area: Area,
    pub address: Option<Address>,
    pub apply_alternate_url: String,
    pub alternate_url: String,
    pub published_at: String,
    pub archived: bool,
    pub snippet: Snippet,
}

impl Vacancy {
    /// Decodes one raw item from a page body.
    pub fn from_value(value: serde_json::Value) -> Result<Self, SchemaError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Returns `(from, to)` of the salary block, or `(None, None)` without one.
pub fn extract_salary(vacancy: &Vacancy) -> (Option<f64>, Option<f64>) {
    match &vacancy.salary {
        Some(salary) => (salary.from, salary.to),
        None => (None, None),
    }
}

/// Returns the full address text if the vacancy has an address block.
pub fn extract_address(vacancy: &Vacancy) -> Option<String> {
    vacancy.address.as_ref().and_then(|address| address.raw.clone())
}

/// Flat, export-ready representation of one vacancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRow {
    pub title: String,
    pub company: String,
    pub salary_from: Option<f64>,
    pub salary_to: Option<f64>,
    pub region: String,
    pub address: Option<String>,
    pub apply_url: String,
    pub vacancy_url: String,
    pub published_at: String,
    pub archived: bool,
    pub requirement: Option<String>,
    pub responsibility: Option<String>,
}

/// A single typed spreadsheet value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Empty,
}

impl<'a> From<Option<&'a str>> for Cell<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Cell::Empty, Cell::Text)
    }
}

impl From<Option<f64>> for Cell<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Empty, Cell::Number)
    }
}

impl ExtractedRow {
    pub fn from_vacancy(vacancy: Vacancy) -> Self {
        let (salary_from, salary_to) = extract_salary(&vacancy);
        let address = extract_address(&vacancy);

        Self {
            title: vacancy.name,
            company: vacancy.employer.name,
            salary_from,
            salary_to,
            region: vacancy.area.name,
            address,
            apply_url: vacancy.apply_alternate_url,
            vacancy_url: vacancy.alternate_url,
            published_at: vacancy.published_at,
            archived: vacancy.archived,
            requirement: vacancy.snippet.requirement,
            responsibility: vacancy.snippet.responsibility,
        }
    }

    /// Cell values in `COLUMNS` order.
    pub fn cells(&self) -> [Cell<'_>; 12] {
        [
            Cell::Text(&self.title),
            Cell::Text(&self.company),
            self.salary_from.into(),
            self.salary_to.into(),
            Cell::Text(&self.region),
            self.address.as_deref().into(),
            Cell::Text(&self.apply_url),
            Cell::Text(&self.vacancy_url),
            Cell::Text(&self.published_at),
            Cell::Bool(self.archived),
            self.requirement.as_deref().into(),
            self.responsibility.as_deref().into(),
        ]
    }
}
