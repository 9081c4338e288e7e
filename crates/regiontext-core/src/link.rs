//! Link annotation types.
//!
//! Provides [`LinkAnnotation`] and [`LinkAction`] for the already-resolved
//! link rectangles an annotation adapter hands to the extractor.

use std::fmt;

use crate::geometry::Rect;

/// Action kind of a link, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkActionKind {
    GotoPage,
    RemoteGoto,
    Launch,
    Uri,
    Unknown,
}

impl LinkActionKind {
    /// Human-readable name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkActionKind::GotoPage => "Goto page",
            LinkActionKind::RemoteGoto => "Remote goto",
            LinkActionKind::Launch => "Launch",
            LinkActionKind::Uri => "URI",
            LinkActionKind::Unknown => "n/a",
        }
    }
}

impl fmt::Display for LinkActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What activating a link does.
///
/// Mirrors the PDF `/GoTo`, `/GoToR`, `/Launch` and `/URI` actions. Anything
/// else (JavaScript, named actions, missing `/A`) is [`LinkAction::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "snake_case")
)]
pub enum LinkAction {
    /// Jump to a page in the same document (1-based page number).
    GotoPage { page: u32 },
    /// Jump into another document.
    RemoteGoto { path: String },
    /// Launch an application or open a file.
    Launch { path: String },
    /// Resolve a URI.
    Uri { uri: String },
    /// Unsupported or missing action.
    Unknown,
}

impl LinkAction {
    pub fn kind(&self) -> LinkActionKind {
        match self {
            LinkAction::GotoPage { .. } => LinkActionKind::GotoPage,
            LinkAction::RemoteGoto { .. } => LinkActionKind::RemoteGoto,
            LinkAction::Launch { .. } => LinkActionKind::Launch,
            LinkAction::Uri { .. } => LinkActionKind::Uri,
            LinkAction::Unknown => LinkActionKind::Unknown,
        }
    }

    /// Destination as text: page number, file path, URI, or empty.
    pub fn destination(&self) -> String {
        match self {
            LinkAction::GotoPage { page } => page.to_string(),
            LinkAction::RemoteGoto { path } | LinkAction::Launch { path } => path.clone(),
            LinkAction::Uri { uri } => uri.clone(),
            LinkAction::Unknown => String::new(),
        }
    }
}

/// A link annotation as resolved by an annotation adapter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkAnnotation {
    /// Hit-box of the link on the page.
    pub rect: Rect,
    /// Annotation title (`/T`); not all links have one.
    pub title: Option<String>,
    /// The resolved action.
    pub action: LinkAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_action_kinds() {
        assert_eq!(
            LinkAction::GotoPage { page: 3 }.kind(),
            LinkActionKind::GotoPage
        );
        assert_eq!(
            LinkAction::RemoteGoto {
                path: "other.pdf".into()
            }
            .kind(),
            LinkActionKind::RemoteGoto
        );
        assert_eq!(
            LinkAction::Launch {
                path: "notes.txt".into()
            }
            .kind(),
            LinkActionKind::Launch
        );
        assert_eq!(
            LinkAction::Uri {
                uri: "https://example.com".into()
            }
            .kind(),
            LinkActionKind::Uri
        );
        assert_eq!(LinkAction::Unknown.kind(), LinkActionKind::Unknown);
    }

    #[test]
    fn link_action_destinations() {
        assert_eq!(LinkAction::GotoPage { page: 12 }.destination(), "12");
        assert_eq!(
            LinkAction::RemoteGoto {
                path: "/docs/other.pdf".into()
            }
            .destination(),
            "/docs/other.pdf"
        );
        assert_eq!(
            LinkAction::Uri {
                uri: "https://example.com".into()
            }
            .destination(),
            "https://example.com"
        );
        assert_eq!(LinkAction::Unknown.destination(), "");
    }

    #[test]
    fn link_action_kind_labels() {
        assert_eq!(LinkActionKind::GotoPage.to_string(), "Goto page");
        assert_eq!(LinkActionKind::RemoteGoto.to_string(), "Remote goto");
        assert_eq!(LinkActionKind::Launch.to_string(), "Launch");
        assert_eq!(LinkActionKind::Uri.to_string(), "URI");
        assert_eq!(LinkActionKind::Unknown.to_string(), "n/a");
    }

    #[test]
    fn link_annotation_clone_and_eq() {
        let link1 = LinkAnnotation {
            rect: Rect::new(72.0, 710.0, 200.0, 730.0),
            title: Some("Home".to_string()),
            action: LinkAction::Uri {
                uri: "https://rust-lang.org".to_string(),
            },
        };
        let link2 = link1.clone();
        assert_eq!(link1, link2);
    }
}
