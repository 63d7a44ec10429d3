use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

/// Records returned per page by the search endpoint.
pub const PAGE_SIZE: u32 = 10;

/// Characters most filesystems refuse in a file name.
static UNSAFE_FILE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[/\\:*?"<>|\x00-\x1F]"#).expect("valid file name pattern")
});

/// What the user asked for: a search phrase and how many vacancies to pull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub search_term: String,
    pub amount: u32,
}

impl SearchRequest {
    pub fn new(search_term: impl Into<String>, amount: u32) -> Self {
        Self {
            search_term: search_term.into(),
            amount,
        }
    }

    /// Number of full pages to request. Amounts below one page yield zero.
    pub fn page_count(&self) -> u32 {
        self.amount / PAGE_SIZE
    }

    /// `{search_term}_{amount}.xlsx`, with unsafe characters replaced by `_`.
    pub fn output_file(&self) -> PathBuf {
        let term = UNSAFE_FILE_CHARS.replace_all(&self.search_term, "_");
        PathBuf::from(format!("{}_{}.xlsx", term, self.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_uses_integer_division() {
        assert_eq!(SearchRequest::new("cook", 0).page_count(), 0);
        assert_eq!(SearchRequest::new("cook", 9).page_count(), 0);
        assert_eq!(SearchRequest::new("cook", 10).page_count(), 1);
        assert_eq!(SearchRequest::new("cook", 25).page_count(), 2);
        assert_eq!(SearchRequest::new("cook", 30).page_count(), 3);
    }

    #[test]
    fn test_output_file_plain() {
        let request = SearchRequest::new("cook", 10);
        assert_eq!(request.output_file(), PathBuf::from("cook_10.xlsx"));
    }

    #[test]
    fn test_output_file_keeps_unicode_and_spaces() {
        let request = SearchRequest::new("повар кондитер", 20);
        assert_eq!(request.output_file(), PathBuf::from("повар кондитер_20.xlsx"));
    }

    #[test]
    fn test_output_file_escapes_unsafe_chars() {
        let request = SearchRequest::new("c++/c# dev: \"senior\"?", 10);
        assert_eq!(
            request.output_file(),
            PathBuf::from("c++_c# dev_ _senior___10.xlsx")
        );
    }

    #[test]
    fn test_output_file_empty_term() {
        assert_eq!(
            SearchRequest::new("", 10).output_file(),
            PathBuf::from("_10.xlsx")
        );
    }
}
