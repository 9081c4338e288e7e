//! Selecting the words that fall inside a region.

use crate::geometry::contained_within_tolerance;
use crate::region::Region;
use crate::words::Word;

/// Select the words that lie inside `region`, in their original order.
///
/// A word matches when at least one of its quads passes
/// [`contained_within_tolerance`] against the region's rectangle and
/// tolerance. A word whose selection wraps across lines owns several quads;
/// it is still returned once. Regions are matched independently, so the same
/// word may be returned for any number of regions.
///
/// Words are expected to have been validated; a word with no quads never
/// matches.
pub fn match_words<'w>(region: &Region, words: &'w [Word]) -> Vec<&'w Word> {
    words
        .iter()
        .filter(|word| word_in_region(region, word))
        .collect()
}

/// Whether any quad of `word` lies inside `region`.
pub fn word_in_region(region: &Region, word: &Word) -> bool {
    word.quads
        .iter()
        .any(|quad| contained_within_tolerance(&quad.bbox(), &region.rect, region.tolerance))
}
