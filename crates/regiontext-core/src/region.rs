//! Target regions and the per-page registry that orders them.

use crate::error::RegionError;
use crate::geometry::{Rect, Tolerance};
use crate::link::{LinkAction, LinkAnnotation};

/// A caller-configured area to extract text from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserRegion {
    /// Area in page user space.
    pub rect: Rect,
    /// Free-form description, used to identify the region in output.
    pub description: String,
    /// Allowed overhang; defaults to [`Tolerance::NONE`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub tolerance: Tolerance,
}

impl UserRegion {
    pub fn new(rect: Rect, description: impl Into<String>) -> Self {
        Self {
            rect,
            description: description.into(),
            tolerance: Tolerance::NONE,
        }
    }

    /// Override the default (zero) tolerance.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Where a region came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum RegionSource {
    /// Configured by the caller.
    User,
    /// Derived from a link annotation.
    Link {
        title: Option<String>,
        action: LinkAction,
    },
}

/// A validated target rectangle, ready for matching.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// 1-based position among regions of the same source kind.
    pub ordinal: usize,
    pub rect: Rect,
    pub tolerance: Tolerance,
    /// Description for user regions; title (or empty) for links.
    pub label: String,
    pub source: RegionSource,
}

impl Region {
    pub fn is_link(&self) -> bool {
        matches!(self.source, RegionSource::Link { .. })
    }
}

/// Ordered collection of a page's regions: user regions first, then links.
///
/// Every rectangle and tolerance is validated on insertion, so anything
/// reachable through [`iter`](RegionRegistry::iter) is well-formed.
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    user: Vec<Region>,
    links: Vec<Region>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a page's registry from configured user regions and the page's
    /// link annotations.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] for the first degenerate
    /// rectangle or invalid tolerance.
    pub fn for_page(
        user_regions: &[UserRegion],
        links: Vec<LinkAnnotation>,
        link_tolerance: Tolerance,
    ) -> Result<Self, RegionError> {
        let mut registry = Self {
            user: Vec::with_capacity(user_regions.len()),
            links: Vec::with_capacity(links.len()),
        };
        for region in user_regions {
            registry.push_user(region.clone())?;
        }
        for link in links {
            registry.push_link(link, link_tolerance)?;
        }
        Ok(registry)
    }

    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] if the rectangle is inverted or
    /// non-finite, or the tolerance is negative.
    pub fn push_user(&mut self, region: UserRegion) -> Result<(), RegionError> {
        check(&region.rect, &region.tolerance)
            .map_err(|e| with_context(e, &format!("user region {:?}", region.description)))?;
        self.user.push(Region {
            ordinal: self.user.len() + 1,
            rect: region.rect,
            tolerance: region.tolerance,
            label: region.description,
            source: RegionSource::User,
        });
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] if the link rectangle is inverted
    /// or non-finite, or the tolerance is negative.
    pub fn push_link(
        &mut self,
        link: LinkAnnotation,
        tolerance: Tolerance,
    ) -> Result<(), RegionError> {
        let ordinal = self.links.len() + 1;
        check(&link.rect, &tolerance).map_err(|e| with_context(e, &format!("link #{ordinal}")))?;
        self.links.push(Region {
            ordinal,
            rect: link.rect,
            tolerance,
            label: link.title.clone().unwrap_or_default(),
            source: RegionSource::Link {
                title: link.title,
                action: link.action,
            },
        });
        Ok(())
    }

    /// Regions in registration order: all user regions, then all links.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.user.iter().chain(self.links.iter())
    }

    pub fn len(&self) -> usize {
        self.user.len() + self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn user_count(&self) -> usize {
        self.user.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

fn check(rect: &Rect, tolerance: &Tolerance) -> Result<(), RegionError> {
    rect.validate()?;
    tolerance.validate()
}

fn with_context(err: RegionError, what: &str) -> RegionError {
    match err {
        RegionError::InvalidInput(msg) => RegionError::InvalidInput(format!("{what}: {msg}")),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(rect: Rect, title: Option<&str>) -> LinkAnnotation {
        LinkAnnotation {
            rect,
            title: title.map(str::to_string),
            action: LinkAction::Uri {
                uri: "https://example.com".to_string(),
            },
        }
    }

    #[test]
    fn user_region_defaults_to_zero_tolerance() {
        let region = UserRegion::new(Rect::new(0.0, 692.0, 150.0, 792.0), "Upper Left header");
        assert_eq!(region.tolerance, Tolerance::NONE);
        let region = region.with_tolerance(Tolerance::new(1.0, 1.5));
        assert_eq!(region.tolerance, Tolerance::new(1.0, 1.5));
    }

    #[test]
    fn registry_orders_user_then_links() {
        let users = vec![
            UserRegion::new(Rect::new(0.0, 692.0, 150.0, 792.0), "Upper Left header"),
            UserRegion::new(Rect::new(450.0, 0.0, 612.0, 100.0), "Lower Right footer"),
        ];
        let links = vec![
            link(Rect::new(72.0, 710.0, 200.0, 730.0), Some("first")),
            link(Rect::new(72.0, 600.0, 200.0, 620.0), None),
        ];
        let registry = RegionRegistry::for_page(&users, links, Tolerance::LINK).unwrap();

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.user_count(), 2);
        assert_eq!(registry.link_count(), 2);

        let labels: Vec<&str> = registry.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Upper Left header", "Lower Right footer", "first", ""]
        );
        let ordinals: Vec<usize> = registry.iter().map(|r| r.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 1, 2]);
    }

    #[test]
    fn registry_link_regions_carry_metadata_and_tolerance() {
        let registry = RegionRegistry::for_page(
            &[],
            vec![link(Rect::new(72.0, 710.0, 200.0, 730.0), Some("Home"))],
            Tolerance::LINK,
        )
        .unwrap();
        let region = registry.iter().next().unwrap();
        assert!(region.is_link());
        assert_eq!(region.tolerance, Tolerance::LINK);
        match &region.source {
            RegionSource::Link { title, action } => {
                assert_eq!(title.as_deref(), Some("Home"));
                assert_eq!(action.destination(), "https://example.com");
            }
            RegionSource::User => panic!("expected link region"),
        }
    }

    #[test]
    fn registry_rejects_degenerate_user_region() {
        let mut registry = RegionRegistry::new();
        let err = registry
            .push_user(UserRegion::new(Rect::new(150.0, 692.0, 0.0, 792.0), "backwards"))
            .unwrap_err();
        assert!(matches!(err, RegionError::InvalidInput(_)));
        assert!(err.to_string().contains("backwards"));
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_rejects_degenerate_link() {
        let err = RegionRegistry::for_page(
            &[],
            vec![link(Rect::new(0.0, 20.0, 10.0, 10.0), None)],
            Tolerance::LINK,
        )
        .unwrap_err();
        assert!(err.to_string().contains("link #1"));
    }

    #[test]
    fn registry_rejects_negative_tolerance() {
        let mut registry = RegionRegistry::new();
        let region = UserRegion::new(Rect::new(0.0, 0.0, 10.0, 10.0), "neg")
            .with_tolerance(Tolerance::new(-2.0, 0.0));
        assert!(registry.push_user(region).is_err());
    }

    #[test]
    fn registry_accepts_zero_area_region() {
        let mut registry = RegionRegistry::new();
        registry
            .push_user(UserRegion::new(Rect::new(5.0, 5.0, 5.0, 5.0), "point"))
            .unwrap();
        assert_eq!(registry.len(), 1);
    }
}
