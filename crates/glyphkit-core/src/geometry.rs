//! 2D geometry primitives shared by the designer crates.
//!
//! Coordinates are stage-local: the host translates raw screen
//! coordinates by the stage's top-left corner before they reach the core,
//! and rendered bounding rectangles are expressed in the same space.

use serde::{Deserialize, Serialize};

/// A point in stage-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite (not NaN, not infinite).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned bounding rectangle in stage-local coordinates.
///
/// Supplied by the external rendering surface for hover and overlap
/// queries; the core never computes these itself since text and image
/// extents depend on font metrics and image dimensions the renderer owns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// True when the point lies strictly inside the rectangle.
    ///
    /// Edges do not count as inside, matching the pointer hit test used
    /// for hover and overlap detection.
    pub fn contains(&self, p: &Point) -> bool {
        p.x > self.left && p.x < self.right() && p.y > self.top && p.y < self.bottom()
    }

    /// True when this rectangle is strictly larger than `other` on both
    /// axes. Strictness on both dimensions prevents retarget flicker
    /// between equally sized siblings.
    pub fn strictly_larger_than(&self, other: &BoundingRect) -> bool {
        self.width > other.width && self.height > other.height
    }
}
