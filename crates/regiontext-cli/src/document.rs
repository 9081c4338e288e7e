//! JSON page-words document: the CLI's word provider and annotation adapter.
//!
//! ```json
//! {
//!   "pages": [
//!     {
//!       "words": [
//!         {"text": "Hello", "bbox": [10, 700, 60, 710], "adjacent_to_space": true},
//!         {"text": "World", "quads": [[65, 700, 120, 710]], "last_word_on_line": true}
//!       ],
//!       "links": [
//!         {"rect": [72, 710, 200, 730], "title": "Home",
//!          "action": {"type": "uri", "uri": "https://example.com"}}
//!       ],
//!       "annotation_count": 2
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use regiontext_core::{
    AnnotationAdapter, LinkAction, LinkAnnotation, Point, Quad, Rect, RegionError, Word,
    WordAttributes, WordProvider,
};
use serde::Deserialize;

/// A whole document as read from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct PageDocument {
    pub pages: Vec<PageRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageRecord {
    #[serde(default)]
    pub words: Vec<WordRecord>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
    /// All annotations on the page, links or not. Defaults to the link count.
    #[serde(default)]
    pub annotation_count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordRecord {
    pub text: String,
    #[serde(default)]
    pub quads: Vec<QuadRecord>,
    /// Shorthand for a single upright quad, `[left, bottom, right, top]`.
    #[serde(default)]
    pub bbox: Option<[f64; 4]>,
    #[serde(default)]
    pub adjacent_to_space: bool,
    #[serde(default)]
    pub last_word_on_line: bool,
    #[serde(default)]
    pub has_soft_hyphen: bool,
}

/// A quad given either as `[left, bottom, right, top]` or by its corners.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuadRecord {
    Rect([f64; 4]),
    Corners {
        top_left: [f64; 2],
        top_right: [f64; 2],
        bottom_left: [f64; 2],
        bottom_right: [f64; 2],
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkRecord {
    /// Two opposite corners, `[x1, y1, x2, y2]`, in any order.
    pub rect: [f64; 4],
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "unknown_action")]
    pub action: LinkAction,
}

fn unknown_action() -> LinkAction {
    LinkAction::Unknown
}

impl QuadRecord {
    fn to_quad(&self) -> Quad {
        match *self {
            QuadRecord::Rect([left, bottom, right, top]) => {
                Quad::from_rect(Rect::from_corners(left, bottom, right, top))
            }
            QuadRecord::Corners {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            } => Quad::new(
                point(top_left),
                point(top_right),
                point(bottom_left),
                point(bottom_right),
            ),
        }
    }
}

fn point([x, y]: [f64; 2]) -> Point {
    Point::new(x, y)
}

impl WordRecord {
    fn attributes(&self) -> WordAttributes {
        let mut attrs = WordAttributes::empty();
        attrs.set(WordAttributes::ADJACENT_TO_SPACE, self.adjacent_to_space);
        attrs.set(WordAttributes::LAST_WORD_ON_LINE, self.last_word_on_line);
        attrs.set(WordAttributes::HAS_SOFT_HYPHEN, self.has_soft_hyphen);
        attrs
    }

    /// Convert to a core [`Word`], rejecting words with no geometry.
    pub fn to_word(&self) -> Result<Word, RegionError> {
        let mut quads: Vec<Quad> = self.quads.iter().map(QuadRecord::to_quad).collect();
        if let Some([left, bottom, right, top]) = self.bbox {
            quads.push(Quad::from_rect(Rect::from_corners(left, bottom, right, top)));
        }
        Word::new(self.text.clone(), quads, self.attributes())
    }
}

impl LinkRecord {
    pub fn to_annotation(&self) -> LinkAnnotation {
        let [x1, y1, x2, y2] = self.rect;
        LinkAnnotation {
            rect: Rect::from_corners(x1, y1, x2, y2),
            title: self.title.clone(),
            action: self.action.clone(),
        }
    }
}

impl PageDocument {
    /// Parse a document from JSON text.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    fn page(&self, page_index: usize) -> Result<&PageRecord, RegionError> {
        self.pages
            .get(page_index)
            .ok_or(RegionError::PageOutOfRange {
                page: page_index,
                page_count: self.pages.len(),
            })
    }
}

impl WordProvider for PageDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn words(&self, page_index: usize) -> Result<Vec<Word>, RegionError> {
        self.page(page_index)?
            .words
            .iter()
            .enumerate()
            .map(|(i, record)| {
                record.to_word().map_err(|e| match e {
                    RegionError::InvalidInput(msg) => RegionError::InvalidInput(format!(
                        "page {} word #{}: {msg}",
                        page_index + 1,
                        i + 1
                    )),
                    other => other,
                })
            })
            .collect()
    }
}

impl AnnotationAdapter for PageDocument {
    fn link_annotations(&self, page_index: usize) -> Result<Vec<LinkAnnotation>, RegionError> {
        Ok(self
            .page(page_index)?
            .links
            .iter()
            .map(LinkRecord::to_annotation)
            .collect())
    }

    fn annotation_count(&self, page_index: usize) -> usize {
        self.pages
            .get(page_index)
            .map(|p| p.annotation_count.unwrap_or(p.links.len()))
            .unwrap_or(0)
    }
}

/// Open a page-words document with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing
/// or is not a valid document.
pub fn open_document(file: &Path) -> Result<PageDocument, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }
    let data = fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })?;
    PageDocument::from_json(&data).map_err(|e| {
        eprintln!("Error: invalid page document {}: {e}", file.display());
        1
    })
}
