//! The design-object model.
//!
//! A [`DesignObject`] is one shape, text, or image instance on the canvas.
//! Each variant lives in its own file and embeds a shared [`ObjectBase`]
//! carrying position, optional extent, rotation, and style fields. Objects
//! are identified by a stable [`ObjectId`] assigned at creation and never
//! reused; ids, not list position, are the durable reference, because the
//! list may be reordered or filtered without invalidating other handles.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

mod circle;
mod fields;
mod image;
mod path;
mod rect;
mod text;

pub use circle::CircleObject;
pub use image::ImageObject;
pub use path::{PathObject, PathSegment};
pub use rect::RectObject;
pub use text::TextObject;

use glyphkit_core::Point;

/// Stable unique identifier for a design object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ObjectId(Uuid);

impl ObjectId {
    /// Generates a fresh v4 id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Variant tag for a design object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Text,
    Rect,
    Circle,
    Path,
    Image,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Text => "text",
            ObjectKind::Rect => "rect",
            ObjectKind::Circle => "circle",
            ObjectKind::Path => "path",
            ObjectKind::Image => "image",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometric and style attributes shared by every variant.
///
/// `width`/`height` are optional: text and unconstrained paths have no
/// declared extent and are measured by the external renderer instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectBase {
    pub id: ObjectId,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Rotation in degrees, 0 when unrotated.
    #[serde(default)]
    pub rotate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<String>,
}

impl ObjectBase {
    /// Creates a base at the given position with no extent or styling.
    pub fn at(id: ObjectId, position: Point) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
            width: None,
            height: None,
            rotate: 0.0,
            fill: None,
            stroke: None,
            stroke_width: None,
            blend_mode: None,
        }
    }
}

/// One design object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DesignObject {
    Text(TextObject),
    Rect(RectObject),
    Circle(CircleObject),
    Path(PathObject),
    Image(ImageObject),
}

impl DesignObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            DesignObject::Text(_) => ObjectKind::Text,
            DesignObject::Rect(_) => ObjectKind::Rect,
            DesignObject::Circle(_) => ObjectKind::Circle,
            DesignObject::Path(_) => ObjectKind::Path,
            DesignObject::Image(_) => ObjectKind::Image,
        }
    }

    pub fn base(&self) -> &ObjectBase {
        match self {
            DesignObject::Text(o) => &o.base,
            DesignObject::Rect(o) => &o.base,
            DesignObject::Circle(o) => &o.base,
            DesignObject::Path(o) => &o.base,
            DesignObject::Image(o) => &o.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ObjectBase {
        match self {
            DesignObject::Text(o) => &mut o.base,
            DesignObject::Rect(o) => &mut o.base,
            DesignObject::Circle(o) => &mut o.base,
            DesignObject::Path(o) => &mut o.base,
            DesignObject::Image(o) => &mut o.base,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.base().id
    }

    pub fn x(&self) -> f64 {
        self.base().x
    }

    pub fn y(&self) -> f64 {
        self.base().y
    }

    pub fn width(&self) -> Option<f64> {
        self.base().width
    }

    pub fn height(&self) -> Option<f64> {
        self.base().height
    }

    pub fn rotation(&self) -> f64 {
        self.base().rotate
    }

    /// Returns a copy of this object moved to `(x, y)`.
    ///
    /// For paths this rewrites every control point by the position delta
    /// relative to the previous anchor and re-anchors at the new position;
    /// the anchor rule is the only mutation that touches more than scalar
    /// fields. All position changes (drag, scale anchor flips, nudges, the
    /// property channel) funnel through here so the rule cannot be missed.
    pub fn at_position(&self, x: f64, y: f64) -> DesignObject {
        match self {
            DesignObject::Path(p) => DesignObject::Path(p.translated_to(x, y)),
            other => {
                let mut moved = other.clone();
                moved.base_mut().x = x;
                moved.base_mut().y = y;
                moved
            }
        }
    }

    /// Returns a copy of this object shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> DesignObject {
        self.at_position(self.x() + dx, self.y() + dy)
    }

    /// Whether this variant declares a dedicated sub-editor.
    ///
    /// Convenience over the registry lookup for code that already holds
    /// the object; the registry remains authoritative for host overrides.
    pub fn has_editor(&self) -> bool {
        matches!(self, DesignObject::Path(_))
    }
}
