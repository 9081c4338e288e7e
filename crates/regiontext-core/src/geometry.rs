use crate::error::RegionError;

/// A point in page user space (bottom-left origin, y grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in page user space.
///
/// Coordinates use a bottom-left origin with y growing upwards:
/// - `left`: smallest x
/// - `bottom`: smallest y
/// - `right`: largest x
/// - `top`: largest y
///
/// Zero-area rectangles are legal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Rect {
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Build a rectangle from two opposite corners given in any order.
    ///
    /// Annotation `/Rect` arrays are not required to list the lower-left
    /// corner first, so link rectangles go through this before registration.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            left: x1.min(x2),
            bottom: y1.min(y2),
            right: x1.max(x2),
            top: y1.max(y2),
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Compute the union of two rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            bottom: self.bottom.min(other.bottom),
            right: self.right.max(other.right),
            top: self.top.max(other.top),
        }
    }

    /// Check that all edges are finite and the rectangle is not inverted.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] for NaN/infinite edges or when
    /// `right < left` or `top < bottom`.
    pub fn validate(&self) -> Result<(), RegionError> {
        let edges = [self.left, self.bottom, self.right, self.top];
        if edges.iter().any(|v| !v.is_finite()) {
            return Err(RegionError::InvalidInput(format!(
                "rectangle has non-finite coordinates: {self:?}"
            )));
        }
        if self.right < self.left || self.top < self.bottom {
            return Err(RegionError::InvalidInput(format!(
                "degenerate rectangle [{}, {}, {}, {}]: right < left or top < bottom",
                self.left, self.bottom, self.right, self.top
            )));
        }
        Ok(())
    }
}

/// Four-corner bounding shape of one rendered word fragment.
///
/// Rotated or skewed text produces a non-rectangular quad; matching only ever
/// looks at its axis-aligned [`bbox`](Quad::bbox).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quad {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl Quad {
    pub fn new(top_left: Point, top_right: Point, bottom_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// An upright quad covering exactly `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top_left: Point::new(rect.left, rect.top),
            top_right: Point::new(rect.right, rect.top),
            bottom_left: Point::new(rect.left, rect.bottom),
            bottom_right: Point::new(rect.right, rect.bottom),
        }
    }

    /// Axis-aligned bounding rectangle over the four corners.
    pub fn bbox(&self) -> Rect {
        let corners = [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ];
        let mut rect = Rect::new(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in corners {
            rect.left = rect.left.min(p.x);
            rect.bottom = rect.bottom.min(p.y);
            rect.right = rect.right.max(p.x);
            rect.top = rect.top.max(p.y);
        }
        rect
    }
}

/// Allowance, in points, by which a word box may overhang a region's edges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance {
    /// Applied to the left and right edges.
    pub horizontal: f64,
    /// Applied to the top and bottom edges.
    pub vertical: f64,
}

impl Tolerance {
    /// No overhang allowed; the default for user regions.
    pub const NONE: Tolerance = Tolerance {
        horizontal: 0.0,
        vertical: 0.0,
    };

    /// Default for link regions. Link hit-boxes tend to be drawn tight
    /// against the text, so glyph boxes routinely poke out by a few points.
    pub const LINK: Tolerance = Tolerance {
        horizontal: 4.0,
        vertical: 2.0,
    };

    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// # Errors
    ///
    /// Returns [`RegionError::InvalidInput`] if either component is negative
    /// or not finite.
    pub fn validate(&self) -> Result<(), RegionError> {
        for (name, v) in [("horizontal", self.horizontal), ("vertical", self.vertical)] {
            if !v.is_finite() || v < 0.0 {
                return Err(RegionError::InvalidInput(format!(
                    "{name} tolerance must be a finite, non-negative number (got {v})"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::NONE
    }
}

/// Tolerance-aware containment test of a word box inside a region.
///
/// The word box is rounded inward-biased (ceil on its low edges, floor on its
/// high edges) and the region outward (floor low, ceil high) before the
/// tolerance is applied. Boxes sitting exactly on a region edge therefore
/// survive floating-point jitter. This is not equivalent to a symmetric
/// `±tolerance` check for non-integer coordinates.
pub fn contained_within_tolerance(quad_bbox: &Rect, region: &Rect, tol: Tolerance) -> bool {
    quad_bbox.left.ceil() >= region.left.floor() - tol.horizontal
        && quad_bbox.right.floor() <= region.right.ceil() + tol.horizontal
        && quad_bbox.top.floor() <= region.top.ceil() + tol.vertical
        && quad_bbox.bottom.ceil() >= region.bottom.floor() - tol.vertical
}
