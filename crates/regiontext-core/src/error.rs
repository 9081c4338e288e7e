//! Error and warning types for regiontext.
//!
//! Provides [`RegionError`] for fatal conditions that stop a page from being
//! processed, and [`ExtractWarning`] for recovered issues that are collected
//! alongside the page's results.

use std::fmt;

use thiserror::Error;

/// Fatal error types for region extraction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// A word, rectangle, or tolerance violated its contract.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A page index past the end of the document was requested.
    #[error("page {page} is out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// The requested 0-based page index.
        page: usize,
        /// Number of pages the provider reports.
        page_count: usize,
    },

    /// The word provider or annotation adapter failed.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Machine-readable warning code for recovered extraction issues.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum ExtractWarningCode {
    /// A line-final hyphenated word had no following word to join with.
    DanglingHyphen,
    /// The word provider returned no words for the page.
    EmptyPage,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl ExtractWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            ExtractWarningCode::DanglingHyphen => "DANGLING_HYPHEN",
            ExtractWarningCode::EmptyPage => "EMPTY_PAGE",
            ExtractWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for ExtractWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal issue encountered while extracting a page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractWarning {
    /// Machine-readable warning code.
    pub code: ExtractWarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// Page number where the warning occurred (1-based).
    pub page: usize,
    /// Label of the region being processed, if the warning is region-specific.
    pub region: Option<String>,
}

impl ExtractWarning {
    /// Create a page-level warning.
    pub fn on_page(code: ExtractWarningCode, description: impl Into<String>, page: usize) -> Self {
        Self {
            code,
            description: description.into(),
            page,
            region: None,
        }
    }

    /// Attach the label of the region that produced this warning.
    pub fn in_region(mut self, label: impl Into<String>) -> Self {
        self.region = Some(label.into());
        self
    }
}

impl fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (page {})", self.code, self.description, self.page)?;
        if let Some(ref region) = self.region {
            write!(f, " [region {region}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_error_invalid_input() {
        let err = RegionError::InvalidInput("word has no quads".to_string());
        assert_eq!(err.to_string(), "invalid input: word has no quads");
    }

    #[test]
    fn region_error_page_out_of_range() {
        let err = RegionError::PageOutOfRange {
            page: 7,
            page_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "page 7 is out of range (document has 3 pages)"
        );
    }

    #[test]
    fn region_error_provider() {
        let err = RegionError::Provider("backend closed".to_string());
        assert_eq!(err.to_string(), "provider error: backend closed");
    }

    #[test]
    fn region_error_is_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(RegionError::InvalidInput("x".to_string()));
        assert!(err.to_string().contains("invalid input"));
    }

    #[test]
    fn warning_code_tags() {
        assert_eq!(ExtractWarningCode::DanglingHyphen.as_str(), "DANGLING_HYPHEN");
        assert_eq!(ExtractWarningCode::EmptyPage.as_str(), "EMPTY_PAGE");
        assert_eq!(ExtractWarningCode::Other("x".into()).as_str(), "OTHER");
    }

    #[test]
    fn warning_display_page_only() {
        let w = ExtractWarning::on_page(ExtractWarningCode::EmptyPage, "no words", 2);
        assert_eq!(w.to_string(), "[EMPTY_PAGE] no words (page 2)");
        assert!(w.region.is_none());
    }

    #[test]
    fn warning_display_with_region() {
        let w = ExtractWarning::on_page(
            ExtractWarningCode::DanglingHyphen,
            "hyphenated word has no continuation",
            1,
        )
        .in_region("Lower Right footer");
        assert_eq!(
            w.to_string(),
            "[DANGLING_HYPHEN] hyphenated word has no continuation (page 1) [region Lower Right footer]"
        );
    }
}
