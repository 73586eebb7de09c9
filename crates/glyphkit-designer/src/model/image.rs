use serde::{Deserialize, Serialize};

use glyphkit_core::Point;

use super::{ObjectBase, ObjectId};

/// A 6x6 transparent PNG used until the host assigns a real image.
const PLACEHOLDER_HREF: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAYAAAAGCAYAAADgzO9IAAAACXBIWXMAAAsTAAALEwEAmpwYAAAAAXNSR0IArs4c6QAAAARnQU1BAACxjwv8YQUAAAAhSURBVHgBtYmxDQAADII8lv9faBNH4yoJLAi4ppxgMZoPoxQrXYyeEfoAAAAASUVORK5CYII=";

/// An embedded or linked image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    /// Image source, typically a data URI or URL resolved by the host.
    pub href: String,
}

impl ImageObject {
    /// Creates an image at `position` with the default attribute set.
    pub fn new(id: ObjectId, position: Point) -> Self {
        Self {
            base: ObjectBase {
                width: Some(100.0),
                height: Some(100.0),
                ..ObjectBase::at(id, position)
            },
            href: PLACEHOLDER_HREF.to_string(),
        }
    }
}
