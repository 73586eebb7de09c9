//! Hover targeting and overlap retargeting.
//!
//! Both queries run against the rendered bounding rectangles supplied by
//! the external rendering surface through [`BoundsProvider`]; the core
//! never computes extents itself. Rectangles are keyed by stable object
//! id, not list position, so reorders and deletions cannot desynchronize
//! the lookup.

use std::collections::HashMap;

use glyphkit_core::{BoundingRect, DesignerError, Point, Result};

use crate::model::{DesignObject, ObjectId};

/// Accessor for per-object rendered bounding rectangles in stage-local
/// coordinates. Implemented by the host's rendering surface; a plain
/// `HashMap` works for tests and headless hosts.
pub trait BoundsProvider {
    fn bounds(&self, id: ObjectId) -> Option<BoundingRect>;
}

impl BoundsProvider for HashMap<ObjectId, BoundingRect> {
    fn bounds(&self, id: ObjectId) -> Option<BoundingRect> {
        self.get(&id).copied()
    }
}

fn required_bounds(provider: &dyn BoundsProvider, id: ObjectId) -> Result<BoundingRect> {
    provider.bounds(id).ok_or(DesignerError::MissingBounds {
        id: id.as_uuid(),
    })
}

/// Returns the topmost object whose rendered rectangle contains the
/// pointer, or `None` when the pointer hovers empty canvas.
///
/// Every listed object must have known bounds; a missing rectangle means
/// the core and the renderer have desynchronized and is surfaced as an
/// error rather than silently skipped.
pub fn hover_target(
    objects: &[DesignObject],
    pointer: Point,
    provider: &dyn BoundsProvider,
) -> Result<Option<ObjectId>> {
    // Later list entries draw on top, so scan back to front.
    for object in objects.iter().rev() {
        let rect = required_bounds(provider, object.id())?;
        if rect.contains(&pointer) {
            return Ok(Some(object.id()));
        }
    }
    Ok(None)
}

/// During an active drag, finds the object the dragged one is being
/// dropped "into": the pointer must lie within the other object's
/// rectangle and the dragged object's rectangle must be strictly larger
/// on both axes. Returns the topmost such object.
///
/// Strict containment on both dimensions avoids flicker between equally
/// sized siblings.
pub fn overlap_target(
    objects: &[DesignObject],
    dragged: ObjectId,
    pointer: Point,
    provider: &dyn BoundsProvider,
) -> Result<Option<ObjectId>> {
    let dragged_rect = required_bounds(provider, dragged)?;

    let mut target = None;
    for object in objects {
        if object.id() == dragged {
            continue;
        }
        let rect = required_bounds(provider, object.id())?;
        if rect.contains(&pointer) && dragged_rect.strictly_larger_than(&rect) {
            target = Some(object.id());
        }
    }
    Ok(target)
}
