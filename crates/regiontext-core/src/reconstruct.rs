//! Rebuilding readable text from a matched word sequence.

use crate::words::{Word, WordAttributes};

/// Outcome of [`reconstruct_text_with_report`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reconstruction {
    /// The rebuilt text.
    pub text: String,
    /// Number of line-final hyphenated words that were joined.
    pub hyphen_joins: usize,
    /// True when the last word was a line-final hyphenated fragment with
    /// nothing after it to join to.
    pub dangling_hyphen: bool,
}

/// Rebuild the text of `words` in order.
///
/// For each word:
/// - a line-final hyphenated word (`HAS_SOFT_HYPHEN` and `LAST_WORD_ON_LINE`)
///   loses its last hyphen and emits no separator, so it runs straight into
///   whatever follows (the rest of its own text, then the next word);
/// - any other word is appended verbatim, followed by a space if
///   `ADJACENT_TO_SPACE` and then a newline if `LAST_WORD_ON_LINE`.
///
/// Empty input yields an empty string.
pub fn reconstruct_text(words: &[&Word]) -> String {
    reconstruct_text_with_report(words).text
}

/// Like [`reconstruct_text`], but also reports hyphenation statistics.
pub fn reconstruct_text_with_report(words: &[&Word]) -> Reconstruction {
    let capacity = words.iter().map(|w| w.text.len() + 1).sum();
    let mut text = String::with_capacity(capacity);
    let mut hyphen_joins = 0;
    let mut dangling_hyphen = false;

    for (i, word) in words.iter().enumerate() {
        if word.is_line_final_hyphenated() {
            if let Some((head, tail)) = word.hyphen_split() {
                text.push_str(head);
                text.push_str(tail);
                hyphen_joins += 1;
                dangling_hyphen = i + 1 == words.len() && tail.is_empty();
                continue;
            }
        }

        text.push_str(&word.text);
        if word.attributes.contains(WordAttributes::ADJACENT_TO_SPACE) {
            text.push(' ');
        }
        if word.attributes.contains(WordAttributes::LAST_WORD_ON_LINE) {
            text.push('\n');
        }
        dangling_hyphen = false;
    }

    Reconstruction {
        text,
        hyphen_joins,
        dangling_hyphen,
    }
}
