use crate::utils::error::{PortfolioError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// True when no value is the empty string. Whitespace counts as content.
pub fn all_non_empty(values: &[&str]) -> bool {
    values.iter().all(|v| !v.is_empty())
}

/// Plain suffix test: `url` must end with `/` followed by `handle`.
pub fn ends_with_handle(url: &str, handle: &str) -> bool {
    url.ends_with(&format!("/{}", handle))
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn matches_url_pattern(url_str: &str, pattern: &Regex) -> bool {
    pattern.is_match(url_str)
}

pub fn compile_pattern(field_name: &str, pattern: &str) -> Result<Regex> {
    if pattern.trim().is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Pattern cannot be empty".to_string(),
        });
    }

    Regex::new(pattern).map_err(|e| PortfolioError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: pattern.to_string(),
        reason: format!("Invalid regular expression: {}", e),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_with_handle() {
        assert!(ends_with_handle("https://twitter.com/abc", "abc"));
        assert!(!ends_with_handle("https://twitter.com/abcd", "abc"));
        assert!(!ends_with_handle("https://twitter.com/xabc", "abc"));
    }

    #[test]
    fn test_all_non_empty() {
        assert!(all_non_empty(&["a", "b"]));
        assert!(!all_non_empty(&["a", ""]));
        assert!(all_non_empty(&["   "]));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("AI Site Auditor (AEO)", "site auditor"));
        assert!(!contains_ignore_case("Auto Mashup Maker", "site auditor"));
    }

    #[test]
    fn test_matches_url_pattern() {
        let re = compile_pattern("social_url_pattern", r"^https://www\.instagram\.com/").unwrap();
        assert!(matches_url_pattern("https://www.instagram.com/someone/", &re));
        assert!(!matches_url_pattern("http://instagram.com/someone", &re));
        assert!(!matches_url_pattern("not a url", &re));

        let bare = compile_pattern("social_url_pattern", r"^instagram\.com/").unwrap();
        assert!(matches_url_pattern("instagram.com/someone", &bare));
    }

    #[test]
    fn test_compile_pattern_rejects_bad_input() {
        assert!(compile_pattern("social_url_pattern", "").is_err());
        assert!(compile_pattern("social_url_pattern", "([unclosed").is_err());
    }
}
