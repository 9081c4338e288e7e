use bitflags::bitflags;

use crate::error::RegionError;
use crate::geometry::{Quad, Rect};

/// Soft hyphen (U+00AD), inserted by layout engines at line-wrap points.
pub const SOFT_HYPHEN: char = '\u{00AD}';

bitflags! {
    /// Layout attributes the word provider attaches to each word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WordAttributes: u8 {
        /// A space separates this word from the next in reading order.
        const ADJACENT_TO_SPACE = 1 << 0;
        /// A line boundary follows this word.
        const LAST_WORD_ON_LINE = 1 << 1;
        /// The text ends in a layout-inserted hyphen (`-` or U+00AD).
        const HAS_SOFT_HYPHEN = 1 << 2;
    }
}

/// Returns `true` for the hyphen characters recognized at line wraps.
pub fn is_hyphen(c: char) -> bool {
    c == '-' || c == SOFT_HYPHEN
}

/// A word on a page, in the provider's reading order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// The literal glyph sequence of this word.
    pub text: String,
    /// One quad per rendered fragment; never empty.
    pub quads: Vec<Quad>,
    /// Spacing, line-break and hyphenation attributes.
    pub attributes: WordAttributes,
}

impl Word {
    /// Create a word, rejecting an empty quad list.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] if `quads` is empty.
    pub fn new(
        text: impl Into<String>,
        quads: Vec<Quad>,
        attributes: WordAttributes,
    ) -> Result<Self, RegionError> {
        let word = Self {
            text: text.into(),
            quads,
            attributes,
        };
        word.validate()?;
        Ok(word)
    }

    /// Shorthand for a single-quad word covering `rect`.
    pub fn from_rect(text: impl Into<String>, rect: Rect, attributes: WordAttributes) -> Self {
        Self {
            text: text.into(),
            quads: vec![Quad::from_rect(rect)],
            attributes,
        }
    }

    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] if the word has no quads.
    pub fn validate(&self) -> Result<(), RegionError> {
        if self.quads.is_empty() {
            return Err(RegionError::InvalidInput(format!(
                "word {:?} has no quads",
                self.text
            )));
        }
        Ok(())
    }

    /// Union of all quad bounding rectangles, or `None` for a quad-less word.
    pub fn bbox(&self) -> Option<Rect> {
        self.quads.iter().map(Quad::bbox).reduce(|a, b| a.union(&b))
    }

    /// Whether this word ends a line with a layout-inserted hyphen.
    pub fn is_line_final_hyphenated(&self) -> bool {
        self.attributes
            .contains(WordAttributes::HAS_SOFT_HYPHEN | WordAttributes::LAST_WORD_ON_LINE)
    }

    /// Split the text around its last hyphen character.
    ///
    /// Returns `(before, after)` without the hyphen itself, or `None` when the
    /// text contains no hyphen.
    pub fn hyphen_split(&self) -> Option<(&str, &str)> {
        let (idx, ch) = self.text.char_indices().rev().find(|&(_, c)| is_hyphen(c))?;
        Some((&self.text[..idx], &self.text[idx + ch.len_utf8()..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::new(10.0, 10.0, 40.0, 20.0)
    }

    #[test]
    fn test_word_new_rejects_empty_quads() {
        let err = Word::new("ghost", Vec::new(), WordAttributes::empty()).unwrap_err();
        assert!(matches!(err, RegionError::InvalidInput(_)));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_word_new_accepts_quads() {
        let word = Word::new(
            "Hello",
            vec![Quad::from_rect(rect())],
            WordAttributes::ADJACENT_TO_SPACE,
        )
        .unwrap();
        assert_eq!(word.text, "Hello");
        assert_eq!(word.quads.len(), 1);
    }

    #[test]
    fn test_word_bbox_unions_quads() {
        let word = Word::new(
            "wrapped",
            vec![
                Quad::from_rect(Rect::new(500.0, 700.0, 560.0, 710.0)),
                Quad::from_rect(Rect::new(72.0, 688.0, 100.0, 698.0)),
            ],
            WordAttributes::empty(),
        )
        .unwrap();
        assert_eq!(word.bbox(), Some(Rect::new(72.0, 688.0, 560.0, 710.0)));
    }

    #[test]
    fn test_word_bbox_none_without_quads() {
        let word = Word {
            text: String::new(),
            quads: Vec::new(),
            attributes: WordAttributes::empty(),
        };
        assert_eq!(word.bbox(), None);
    }

    #[test]
    fn test_line_final_hyphenated_needs_both_flags() {
        let both = Word::from_rect(
            "inter-",
            rect(),
            WordAttributes::HAS_SOFT_HYPHEN | WordAttributes::LAST_WORD_ON_LINE,
        );
        let hyphen_only = Word::from_rect("inter-", rect(), WordAttributes::HAS_SOFT_HYPHEN);
        let eol_only = Word::from_rect("inter-", rect(), WordAttributes::LAST_WORD_ON_LINE);
        assert!(both.is_line_final_hyphenated());
        assert!(!hyphen_only.is_line_final_hyphenated());
        assert!(!eol_only.is_line_final_hyphenated());
    }

    #[test]
    fn test_hyphen_split_trailing() {
        let word = Word::from_rect("inter-", rect(), WordAttributes::empty());
        assert_eq!(word.hyphen_split(), Some(("inter", "")));
    }

    #[test]
    fn test_hyphen_split_soft_hyphen() {
        let word = Word::from_rect("inter\u{00AD}", rect(), WordAttributes::empty());
        assert_eq!(word.hyphen_split(), Some(("inter", "")));
    }

    #[test]
    fn test_hyphen_split_mid_word() {
        let word = Word::from_rect("inter-national", rect(), WordAttributes::empty());
        assert_eq!(word.hyphen_split(), Some(("inter", "national")));
    }

    #[test]
    fn test_hyphen_split_uses_last_hyphen() {
        let word = Word::from_rect("well-be-", rect(), WordAttributes::empty());
        assert_eq!(word.hyphen_split(), Some(("well-be", "")));
    }

    #[test]
    fn test_hyphen_split_none() {
        let word = Word::from_rect("plain", rect(), WordAttributes::empty());
        assert_eq!(word.hyphen_split(), None);
    }

    #[test]
    fn test_is_hyphen() {
        assert!(is_hyphen('-'));
        assert!(is_hyphen(SOFT_HYPHEN));
        assert!(!is_hyphen('\u{2010}'));
        assert!(!is_hyphen('a'));
    }
}
