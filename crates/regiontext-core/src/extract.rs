//! Page-level driver tying providers, registry, matcher and reconstructor
//! together.

use tracing::{debug, warn};

use crate::error::{ExtractWarning, ExtractWarningCode, RegionError};
use crate::geometry::Tolerance;
use crate::link::LinkAnnotation;
use crate::matcher::match_words;
use crate::reconstruct::reconstruct_text_with_report;
use crate::region::{Region, RegionRegistry, UserRegion};
use crate::unicode_norm::UnicodeNorm;
use crate::words::Word;

/// Supplies a page's words in final reading order.
///
/// Implementations own any sorting policy; the extractor never reorders.
pub trait WordProvider {
    /// Number of pages available.
    fn page_count(&self) -> usize;

    /// Words of the 0-based page `page_index`. Every word must own at least
    /// one quad.
    fn words(&self, page_index: usize) -> Result<Vec<Word>, RegionError>;
}

/// Supplies a page's link annotations, already resolved.
pub trait AnnotationAdapter {
    /// Link annotations of the 0-based page `page_index`, in page order.
    fn link_annotations(&self, page_index: usize) -> Result<Vec<LinkAnnotation>, RegionError>;

    /// Total annotations on the page, links or not. Only used for reporting.
    fn annotation_count(&self, page_index: usize) -> usize {
        self.link_annotations(page_index)
            .map(|links| links.len())
            .unwrap_or(0)
    }
}

/// Options for region extraction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractOptions {
    /// Tolerance applied to every link region (default: 4 horizontal, 2 vertical).
    pub link_tolerance: Tolerance,
    /// Normalization applied to each region's text (default: none).
    pub unicode_norm: UnicodeNorm,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            link_tolerance: Tolerance::LINK,
            unicode_norm: UnicodeNorm::None,
        }
    }
}

/// Text found inside one region on one page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// 1-based page number.
    pub page_number: usize,
    /// The region, with its metadata.
    pub region: Region,
    /// Reconstructed text; empty when nothing matched.
    pub text: String,
    /// Number of words that matched the region.
    pub word_count: usize,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Everything extracted from one page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageExtraction {
    /// 1-based page number.
    pub page_number: usize,
    /// Words the provider returned for the page.
    pub word_count: usize,
    /// User regions evaluated on the page.
    pub user_region_count: usize,
    /// Link regions evaluated on the page.
    pub link_count: usize,
    /// All annotations on the page, as reported by the adapter.
    pub annotation_count: usize,
    /// One result per region, user regions first, in registration order.
    pub results: Vec<MatchResult>,
    /// Recovered issues.
    pub warnings: Vec<ExtractWarning>,
}

/// Runs region extraction page by page.
///
/// The extractor keeps no state between pages; each call to
/// [`extract_page`](RegionExtractor::extract_page) is self-contained.
#[derive(Debug, Clone, Default)]
pub struct RegionExtractor {
    options: ExtractOptions,
}

struct PreparedPage {
    page_number: usize,
    words: Vec<Word>,
    registry: RegionRegistry,
    annotation_count: usize,
}

impl RegionExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract text for every user region and every link on one page.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::PageOutOfRange`] for an index past the end,
    /// [`RegionError::InvalidInput`] for a word without quads or a degenerate
    /// region, and propagates provider errors.
    pub fn extract_page<P, A>(
        &self,
        page_index: usize,
        user_regions: &[UserRegion],
        provider: &P,
        adapter: &A,
    ) -> Result<PageExtraction, RegionError>
    where
        P: WordProvider + ?Sized,
        A: AnnotationAdapter + ?Sized,
    {
        let page = self.prepare(page_index, user_regions, provider, adapter)?;
        let evaluated = page
            .registry
            .iter()
            .map(|region| self.evaluate(page.page_number, region, &page.words))
            .collect();
        Ok(self.finish(page, evaluated))
    }

    /// Same as [`extract_page`](RegionExtractor::extract_page), evaluating
    /// the page's regions on the rayon thread pool. Results keep registry
    /// order.
    ///
    /// # Errors
    ///
    /// See [`extract_page`](RegionExtractor::extract_page).
    #[cfg(feature = "parallel")]
    pub fn extract_page_parallel<P, A>(
        &self,
        page_index: usize,
        user_regions: &[UserRegion],
        provider: &P,
        adapter: &A,
    ) -> Result<PageExtraction, RegionError>
    where
        P: WordProvider + ?Sized,
        A: AnnotationAdapter + ?Sized,
    {
        use rayon::prelude::*;

        let page = self.prepare(page_index, user_regions, provider, adapter)?;
        let regions: Vec<&Region> = page.registry.iter().collect();
        let evaluated = regions
            .par_iter()
            .map(|region| self.evaluate(page.page_number, region, &page.words))
            .collect();
        Ok(self.finish(page, evaluated))
    }

    /// Extract a list of pages one at a time, stopping at the first error.
    ///
    /// # Errors
    ///
    /// See [`extract_page`](RegionExtractor::extract_page).
    pub fn extract_pages<P, A>(
        &self,
        page_indices: &[usize],
        user_regions: &[UserRegion],
        provider: &P,
        adapter: &A,
    ) -> Result<Vec<PageExtraction>, RegionError>
    where
        P: WordProvider + ?Sized,
        A: AnnotationAdapter + ?Sized,
    {
        page_indices
            .iter()
            .map(|&idx| self.extract_page(idx, user_regions, provider, adapter))
            .collect()
    }

    fn prepare<P, A>(
        &self,
        page_index: usize,
        user_regions: &[UserRegion],
        provider: &P,
        adapter: &A,
    ) -> Result<PreparedPage, RegionError>
    where
        P: WordProvider + ?Sized,
        A: AnnotationAdapter + ?Sized,
    {
        let page_count = provider.page_count();
        if page_index >= page_count {
            return Err(RegionError::PageOutOfRange {
                page: page_index,
                page_count,
            });
        }

        let words = provider.words(page_index)?;
        for (i, word) in words.iter().enumerate() {
            word.validate().map_err(|e| match e {
                RegionError::InvalidInput(msg) => RegionError::InvalidInput(format!(
                    "page {} word #{}: {msg}",
                    page_index + 1,
                    i + 1
                )),
                other => other,
            })?;
        }

        let links = adapter.link_annotations(page_index)?;
        let annotation_count = adapter.annotation_count(page_index).max(links.len());
        let registry = RegionRegistry::for_page(user_regions, links, self.options.link_tolerance)?;

        debug!(
            page = page_index + 1,
            words = words.len(),
            user_regions = registry.user_count(),
            links = registry.link_count(),
            "extracting page"
        );

        Ok(PreparedPage {
            page_number: page_index + 1,
            words,
            registry,
            annotation_count,
        })
    }

    fn evaluate(
        &self,
        page_number: usize,
        region: &Region,
        words: &[Word],
    ) -> (MatchResult, Option<ExtractWarning>) {
        let matched = match_words(region, words);
        let report = reconstruct_text_with_report(&matched);

        let warning = report.dangling_hyphen.then(|| {
            warn!(
                page = page_number,
                region = %region.label,
                "hyphenated word at end of region has no continuation"
            );
            ExtractWarning::on_page(
                ExtractWarningCode::DanglingHyphen,
                "hyphenated word at end of region has no continuation",
                page_number,
            )
            .in_region(region_name(region))
        });

        debug!(
            page = page_number,
            region = %region_name(region),
            matched = matched.len(),
            "region matched"
        );

        let result = MatchResult {
            page_number,
            region: region.clone(),
            text: self.options.unicode_norm.apply(report.text),
            word_count: matched.len(),
        };
        (result, warning)
    }

    fn finish(
        &self,
        page: PreparedPage,
        evaluated: Vec<(MatchResult, Option<ExtractWarning>)>,
    ) -> PageExtraction {
        let mut warnings = Vec::new();
        if page.words.is_empty() {
            warnings.push(ExtractWarning::on_page(
                ExtractWarningCode::EmptyPage,
                "page has no words",
                page.page_number,
            ));
        }

        let mut results = Vec::with_capacity(evaluated.len());
        for (result, warning) in evaluated {
            results.push(result);
            warnings.extend(warning);
        }

        PageExtraction {
            page_number: page.page_number,
            word_count: page.words.len(),
            user_region_count: page.registry.user_count(),
            link_count: page.registry.link_count(),
            annotation_count: page.annotation_count,
            results,
            warnings,
        }
    }
}

/// Identifier used in logs and warnings, e.g. `user #1 "Header"` or `link #2`.
fn region_name(region: &Region) -> String {
    let kind = if region.is_link() { "link" } else { "user" };
    if region.label.is_empty() {
        format!("{kind} #{}", region.ordinal)
    } else {
        format!("{kind} #{} {:?}", region.ordinal, region.label)
    }
}
