//! Geometric transform actions.
//!
//! Each action is a pure function `(object, gesture snapshot, pointer) ->
//! new object`. The snapshot captured at gesture start is the reference
//! frame for every delta, so the functions are stateless and replayable.

use serde::{Deserialize, Serialize};

use glyphkit_core::Point;

use crate::model::DesignObject;

/// Pointer position and object geometry captured when a gesture starts.
///
/// `width`/`height` are captured as 0 for variants without a declared
/// extent, matching how a freehand initial sizing starts from nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureSnapshot {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub object_x: f64,
    pub object_y: f64,
    pub width: f64,
    pub height: f64,
    pub rotate: f64,
}

impl GestureSnapshot {
    /// Captures the gesture reference frame from the pointer and the
    /// object's geometry at gesture start.
    pub fn capture(pointer: Point, object: &DesignObject) -> Self {
        Self {
            pointer_x: pointer.x,
            pointer_y: pointer.y,
            object_x: object.x(),
            object_y: object.y(),
            width: object.width().unwrap_or(0.0),
            height: object.height().unwrap_or(0.0),
            rotate: object.rotation(),
        }
    }
}

/// Moves the object so the pointer-to-object offset captured at gesture
/// start stays constant; the object never jumps to the pointer.
pub fn drag(object: &DesignObject, snapshot: &GestureSnapshot, pointer: Point) -> DesignObject {
    object.at_position(
        pointer.x - (snapshot.pointer_x - snapshot.object_x),
        pointer.y - (snapshot.pointer_y - snapshot.object_y),
    )
}

/// Grows the object's extent by the pointer delta since gesture start.
///
/// Dragging a resize handle past the opposite edge mirrors the box
/// instead of producing a negative size: the anchor shifts by the
/// (negative) raw extent and the stored extent is its absolute value.
/// Both axes are handled independently.
pub fn scale(object: &DesignObject, snapshot: &GestureSnapshot, pointer: Point) -> DesignObject {
    let raw_width = snapshot.width + pointer.x - snapshot.pointer_x;
    let raw_height = snapshot.height + pointer.y - snapshot.pointer_y;

    let x = if raw_width > 0.0 {
        snapshot.object_x
    } else {
        snapshot.object_x + raw_width
    };
    let y = if raw_height > 0.0 {
        snapshot.object_y
    } else {
        snapshot.object_y + raw_height
    };

    let mut scaled = object.at_position(x, y);
    scaled.base_mut().width = Some(raw_width.abs());
    scaled.base_mut().height = Some(raw_height.abs());
    scaled
}

/// Rotates the object toward the pointer.
///
/// The angle is `atan2(center.x - pointer.x, center.y - pointer.y)` in
/// degrees, then `-(degrees + 45)`. The `+45`/negation calibrates the
/// rotate handle's rest position (placed diagonally from the object) to
/// zero rotation; the constant is fixed for parity with the handle
/// placement and must not be re-derived.
pub fn rotate(object: &DesignObject, snapshot: &GestureSnapshot, pointer: Point) -> DesignObject {
    let center_x = snapshot.object_x + snapshot.width / 2.0;
    let center_y = snapshot.object_y + snapshot.height / 2.0;

    let angle = (center_x - pointer.x).atan2(center_y - pointer.y);
    let rotation = -(angle.to_degrees() + 45.0);

    let mut rotated = object.clone();
    rotated.base_mut().rotate = rotation;
    rotated
}
