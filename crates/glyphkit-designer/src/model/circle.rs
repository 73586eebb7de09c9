use serde::{Deserialize, Serialize};

use glyphkit_core::Point;

use super::{ObjectBase, ObjectId};

/// An ellipse inscribed in the object's `width` x `height` box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleObject {
    #[serde(flatten)]
    pub base: ObjectBase,
}

impl CircleObject {
    /// Creates a circle at `position` with the default attribute set.
    pub fn new(id: ObjectId, position: Point) -> Self {
        Self {
            base: ObjectBase {
                width: Some(5.0),
                height: Some(5.0),
                fill: Some("yellow".to_string()),
                stroke_width: Some(0.0),
                blend_mode: Some("normal".to_string()),
                ..ObjectBase::at(id, position)
            },
        }
    }
}
