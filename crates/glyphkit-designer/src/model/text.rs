use serde::{Deserialize, Serialize};

use glyphkit_core::Point;

use super::{ObjectBase, ObjectId};

/// A text label. Carries no declared extent; the renderer measures it
/// from font metrics and reports the bounding rectangle back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    pub text: String,
    pub font_weight: String,
    pub font_style: String,
    pub text_decoration: String,
    pub font_size: f64,
    pub font_family: String,
}

impl TextObject {
    /// Creates a text object at `position` with the default attribute set.
    pub fn new(id: ObjectId, position: Point) -> Self {
        Self {
            base: ObjectBase {
                fill: Some("black".to_string()),
                ..ObjectBase::at(id, position)
            },
            text: "Type some text...".to_string(),
            font_weight: "normal".to_string(),
            font_style: "normal".to_string(),
            text_decoration: "none".to_string(),
            font_size: 20.0,
            font_family: "Open Sans".to_string(),
        }
    }
}
