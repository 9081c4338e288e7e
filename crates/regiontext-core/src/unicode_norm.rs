//! Unicode normalization for reconstructed region text.

use unicode_normalization::UnicodeNormalization;

/// Unicode normalization form applied to each region's text.
///
/// Word providers differ in how they emit accented characters and ligatures
/// (composed vs. decomposed). Normalizing lets callers compare region text
/// across documents produced by different tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnicodeNorm {
    /// Leave text as produced (default).
    #[default]
    None,
    /// Canonical Decomposition, followed by Canonical Composition (NFC).
    Nfc,
    /// Canonical Decomposition (NFD).
    Nfd,
    /// Compatibility Decomposition, followed by Canonical Composition (NFKC).
    Nfkc,
    /// Compatibility Decomposition (NFKD).
    Nfkd,
}

impl UnicodeNorm {
    /// Apply this normalization form, taking ownership to skip the copy when
    /// no normalization is requested.
    pub fn apply(&self, text: String) -> String {
        match self {
            UnicodeNorm::None => text,
            UnicodeNorm::Nfc => text.nfc().collect(),
            UnicodeNorm::Nfd => text.nfd().collect(),
            UnicodeNorm::Nfkc => text.nfkc().collect(),
            UnicodeNorm::Nfkd => text.nfkd().collect(),
        }
    }
}
