use serde::{Deserialize, Serialize};

use glyphkit_core::Point;

use super::{ObjectBase, ObjectId};

/// One cubic bezier segment: two control points and the end point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub x: f64,
    pub y: f64,
}

impl PathSegment {
    /// Returns this segment shifted by `(dx, dy)`.
    pub fn shifted(&self, dx: f64, dy: f64) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A freeform cubic-bezier path.
///
/// Segment coordinates are always expressed relative to the
/// `move_x`/`move_y` anchor. Translating the object therefore rewrites
/// every segment by the position delta and re-anchors; see
/// [`PathObject::translated_to`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    pub segments: Vec<PathSegment>,
    pub closed: bool,
    pub move_x: f64,
    pub move_y: f64,
}

impl PathObject {
    /// Creates an empty open path at `position` with the default
    /// attribute set. The path editor appends segments afterwards.
    pub fn new(id: ObjectId, position: Point) -> Self {
        Self {
            base: ObjectBase {
                fill: Some("#e3e3e3".to_string()),
                stroke: Some("gray".to_string()),
                stroke_width: Some(1.0),
                ..ObjectBase::at(id, position)
            },
            segments: Vec::new(),
            closed: false,
            move_x: position.x,
            move_y: position.y,
        }
    }

    /// Returns this path moved to `(x, y)`: every segment is rewritten by
    /// the delta from the previous anchor, and the anchor becomes the new
    /// position.
    pub fn translated_to(&self, x: f64, y: f64) -> Self {
        let dx = x - self.move_x;
        let dy = y - self.move_y;

        let mut moved = self.clone();
        moved.base.x = x;
        moved.base.y = y;
        moved.segments = self.segments.iter().map(|s| s.shifted(dx, dy)).collect();
        moved.move_x = x;
        moved.move_y = y;
        moved
    }

    /// Appends a segment, expressed relative to the current anchor.
    pub fn push_segment(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Marks the path closed (the renderer adds the closing line).
    pub fn close(&mut self) {
        self.closed = true;
    }
}
