//! regiontext-core: text extraction from page regions and link rectangles.
//!
//! Given the words of a page (text, quads, layout attributes) in reading order
//! and a set of target rectangles, this crate selects the words that fall
//! inside each rectangle and rebuilds their text with spaces, line breaks and
//! hyphen-joined line wraps restored.
//!
//! Parsing the page and resolving annotations are left to the caller through
//! the [`WordProvider`] and [`AnnotationAdapter`] traits.
//!
//! # Example
//!
//! ```
//! use regiontext_core::{
//!     match_words, reconstruct_text, Rect, RegionRegistry, Tolerance, UserRegion, Word,
//!     WordAttributes,
//! };
//!
//! let words = vec![
//!     Word::from_rect("Hello", Rect::new(10.0, 700.0, 60.0, 710.0), WordAttributes::ADJACENT_TO_SPACE),
//!     Word::from_rect("World", Rect::new(65.0, 700.0, 120.0, 710.0), WordAttributes::LAST_WORD_ON_LINE),
//! ];
//! let header = UserRegion::new(Rect::new(0.0, 692.0, 150.0, 792.0), "Upper Left header");
//! let registry = RegionRegistry::for_page(&[header], Vec::new(), Tolerance::LINK).unwrap();
//!
//! let region = registry.iter().next().unwrap();
//! assert_eq!(reconstruct_text(&match_words(region, &words)), "Hello World\n");
//! ```

pub mod error;
pub mod extract;
pub mod geometry;
pub mod link;
pub mod matcher;
pub mod reconstruct;
pub mod region;
pub mod unicode_norm;
pub mod words;

pub use error::{ExtractWarning, ExtractWarningCode, RegionError};
pub use extract::{
    AnnotationAdapter, ExtractOptions, MatchResult, PageExtraction, RegionExtractor, WordProvider,
};
pub use geometry::{Point, Quad, Rect, Tolerance, contained_within_tolerance};
pub use link::{LinkAction, LinkActionKind, LinkAnnotation};
pub use matcher::{match_words, word_in_region};
pub use reconstruct::{Reconstruction, reconstruct_text, reconstruct_text_with_report};
pub use region::{Region, RegionRegistry, RegionSource, UserRegion};
pub use unicode_norm::UnicodeNorm;
pub use words::{SOFT_HYPHEN, Word, WordAttributes, is_hyphen};
