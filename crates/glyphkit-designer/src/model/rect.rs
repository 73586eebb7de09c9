use serde::{Deserialize, Serialize};

use glyphkit_core::Point;

use super::{ObjectBase, ObjectId};

/// An axis-aligned rectangle with an optional corner radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    /// Corner radius, 0 for square corners.
    #[serde(default)]
    pub radius: f64,
}

impl RectObject {
    /// Creates a rectangle at `position` with the default attribute set.
    pub fn new(id: ObjectId, position: Point) -> Self {
        Self {
            base: ObjectBase {
                width: Some(5.0),
                height: Some(5.0),
                fill: Some("blue".to_string()),
                stroke_width: Some(0.0),
                blend_mode: Some("normal".to_string()),
                ..ObjectBase::at(id, position)
            },
            radius: 0.0,
        }
    }
}
