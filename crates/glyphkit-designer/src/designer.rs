//! The interaction state machine.
//!
//! [`Designer`] owns the current mode, the hover/selection targets, the
//! gesture snapshot, and the derived handler overlay. It never owns the
//! object list: every event method receives the host's current list and
//! hands back `Some(new_list)` when the event mutated it — exactly one
//! proposed replacement per mutation, so the host can diff, persist, or
//! implement undo on top.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use glyphkit_core::{DesignerError, Point, Result};

use crate::actions::{self, GestureSnapshot};
use crate::canvas::CanvasGeometry;
use crate::model::{DesignObject, ObjectId, ObjectKind};
use crate::registry::ObjectRegistry;
use crate::selection::{hover_target, overlap_target, BoundsProvider};

/// Interaction mode. Gates which gesture handlers are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Idle; hovering updates the current object.
    Free,
    /// A creation tool is armed; the next pointer-down creates an object.
    Draw,
    Drag,
    Scale,
    Rotate,
    /// A type-specific sub-editor owns the gesture (e.g. bezier editing).
    EditObject,
    /// Reserved for the text-entry sub-mode.
    Type,
}

/// Which transform a handler anchor starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Scale,
    Rotate,
}

impl GestureKind {
    fn mode(self) -> Mode {
        match self {
            GestureKind::Drag => Mode::Drag,
            GestureKind::Scale => Mode::Scale,
            GestureKind::Rotate => Mode::Rotate,
        }
    }
}

/// Which z-order end an arrange command moves the selection to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeDirection {
    Front,
    Back,
}

/// Axis for keyboard nudges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Geometry of the handler overlay around the selected object, in
/// stage-local coordinates. Derived state, never authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandlerBox {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub rotate: f64,
}

/// The state the machine threads through every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    pub mode: Mode,
    /// Hover/drag target.
    pub current: Option<ObjectId>,
    /// Owner of the handler overlay and keyboard commands.
    pub selected: Option<ObjectId>,
    /// Armed creation tool, consumed by the next pointer-down.
    pub selected_tool: Option<ObjectKind>,
    /// Reference frame of the in-flight gesture.
    pub gesture: Option<GestureSnapshot>,
    /// Handler overlay geometry, `None` while hidden.
    pub handler: Option<HandlerBox>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: Mode::Free,
            current: None,
            selected: None,
            selected_tool: None,
            gesture: None,
            handler: None,
        }
    }
}

/// The interaction core: mode state machine plus transform dispatch.
#[derive(Clone)]
pub struct Designer {
    canvas: CanvasGeometry,
    registry: ObjectRegistry,
    state: InteractionState,
}

impl Designer {
    /// Creates a designer over the given canvas with the built-in
    /// object-type registry.
    pub fn new(canvas: CanvasGeometry) -> Self {
        Self::with_registry(canvas, ObjectRegistry::builtin())
    }

    /// Creates a designer with a host-supplied registry (e.g. a glyph
    /// editor registering only rectangles and paths).
    pub fn with_registry(canvas: CanvasGeometry, registry: ObjectRegistry) -> Self {
        Self {
            canvas,
            registry,
            state: InteractionState::default(),
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.state.selected
    }

    pub fn current(&self) -> Option<ObjectId> {
        self.state.current
    }

    pub fn handler(&self) -> Option<&HandlerBox> {
        self.state.handler.as_ref()
    }

    pub fn canvas(&self) -> &CanvasGeometry {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut CanvasGeometry {
        &mut self.canvas
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Resets to the initial state. The host calls this whenever the
    /// object list identity changes out from under the core (e.g. an
    /// external deletion).
    pub fn reset(&mut self) {
        self.state = InteractionState::default();
    }

    /// Arms a creation tool: `Free -> Draw`. Clears selection and hover.
    pub fn select_tool(&mut self, kind: ObjectKind) {
        if !self.registry.contains(kind) {
            warn!(%kind, "ignoring unregistered creation tool");
            return;
        }
        self.state.mode = Mode::Draw;
        self.state.selected_tool = Some(kind);
        self.state.current = None;
        self.state.selected = None;
        self.state.handler = None;
    }

    /// Pointer-down on the canvas. In `Draw` mode this instantiates the
    /// armed variant at the snapped pointer position, appends it to the
    /// list, captures the gesture snapshot, and enters `EditObject`
    /// (variant has an editor) or `Scale` (freehand initial sizing).
    pub fn pointer_down(
        &mut self,
        objects: &[DesignObject],
        screen: Point,
    ) -> Result<Option<Vec<DesignObject>>> {
        let pointer = match self.canvas.pointer_to_stage(screen) {
            Ok(p) => p,
            Err(e) => return discard_pointer_event(e),
        };

        // Any pointer-down outside a gesture drops the selection.
        self.state.selected = None;

        if self.state.mode != Mode::Draw {
            return Ok(None);
        }

        let tool = self.state.selected_tool.ok_or(DesignerError::NoArmedTool)?;
        let object = self
            .registry
            .create(tool, pointer)
            .ok_or(DesignerError::NoArmedTool)?;

        self.state.current = Some(object.id());
        self.state.selected = Some(object.id());
        self.state.gesture = Some(GestureSnapshot::capture(pointer, &object));
        self.state.mode = if self.registry.has_editor(tool) {
            Mode::EditObject
        } else {
            Mode::Scale
        };
        self.state.selected_tool = None;

        let mut updated = objects.to_vec();
        updated.push(object);
        Ok(Some(updated))
    }

    /// Starts a drag/scale/rotate gesture on the currently hovered
    /// object: `Free -> {Drag, Scale, Rotate}`. Captures the gesture
    /// snapshot and promotes the hover target to the selection.
    pub fn start_gesture(
        &mut self,
        objects: &[DesignObject],
        kind: GestureKind,
        screen: Point,
    ) -> Result<()> {
        let pointer = match self.canvas.pointer_to_stage(screen) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "discarding gesture start");
                return Ok(());
            }
        };

        if self.state.mode != Mode::Free {
            debug!(mode = ?self.state.mode, "gesture start ignored outside Free mode");
            return Ok(());
        }

        let id = self.state.current.ok_or(DesignerError::NoCurrentObject)?;
        let object = find_object(objects, id)?;

        self.state.gesture = Some(GestureSnapshot::capture(pointer, object));
        self.state.selected = Some(id);
        self.state.mode = kind.mode();
        Ok(())
    }

    /// Pointer movement. In `Free` mode this updates the hover target;
    /// during a gesture it runs the transform action for the current mode
    /// and, while dragging, performs overlap retargeting.
    pub fn pointer_move(
        &mut self,
        objects: &[DesignObject],
        screen: Point,
        provider: &dyn BoundsProvider,
    ) -> Result<Option<Vec<DesignObject>>> {
        let pointer = match self.canvas.pointer_to_stage(screen) {
            Ok(p) => p,
            Err(e) => return discard_pointer_event(e),
        };

        match self.state.mode {
            Mode::Drag | Mode::Scale | Mode::Rotate => {
                self.transform_selected(objects, pointer, provider)
            }
            Mode::Free => {
                let target = hover_target(objects, pointer, provider)?;
                self.state.current = target;
                self.state.handler = match target {
                    Some(id) => {
                        let object = find_object(objects, id)?;
                        Some(self.handler_for(object, provider)?)
                    }
                    None => None,
                };
                Ok(None)
            }
            Mode::Draw | Mode::EditObject | Mode::Type => Ok(None),
        }
    }

    /// Applies the active gesture's transform. The gesture owner is the
    /// selection pinned at gesture start, never `current`: overlap
    /// retargeting reassigns `current` mid-drag, and the transform must
    /// keep following the object the user grabbed.
    fn transform_selected(
        &mut self,
        objects: &[DesignObject],
        pointer: Point,
        provider: &dyn BoundsProvider,
    ) -> Result<Option<Vec<DesignObject>>> {
        let id = self.state.selected.ok_or(DesignerError::NoSelection)?;
        let snapshot = self.state.gesture.ok_or(DesignerError::NoGesture)?;
        let index = find_index(objects, id)?;

        let transformed = match self.state.mode {
            Mode::Drag => actions::drag(&objects[index], &snapshot, pointer),
            Mode::Scale => actions::scale(&objects[index], &snapshot, pointer),
            Mode::Rotate => actions::rotate(&objects[index], &snapshot, pointer),
            _ => unreachable!("transform_selected only runs in gesture modes"),
        };

        self.state.handler = Some(self.handler_for(&transformed, provider)?);

        let mut updated = objects.to_vec();
        updated[index] = transformed;

        // Covering a smaller sibling retargets the hover so it can be
        // manipulated next without a separate click. Only `current` and
        // the overlay move; the drag itself stays on the selection.
        if self.state.mode == Mode::Drag {
            if let Some(other) = overlap_target(&updated, id, pointer, provider)? {
                let object = find_object(&updated, other)?;
                self.state.current = Some(other);
                self.state.handler = Some(self.handler_for(object, provider)?);
            }
        }

        Ok(Some(updated))
    }

    /// Pointer-up: ends any in-flight gesture, back to `Free`.
    pub fn pointer_up(&mut self) {
        if matches!(self.state.mode, Mode::Drag | Mode::Scale | Mode::Rotate) {
            self.state.mode = Mode::Free;
            self.state.gesture = None;
        }
    }

    /// Pointer left the canvas region. Clears hover while idle; an
    /// active drag keeps tracking the pointer outside the bounds.
    pub fn pointer_leave(&mut self) {
        if self.state.mode == Mode::Free {
            self.state.current = None;
            self.state.handler = None;
        }
    }

    /// Double-click on the selected object: enters the variant's
    /// dedicated editor when it declares one.
    pub fn open_editor(&mut self, objects: &[DesignObject]) -> Result<()> {
        let id = self.state.selected.ok_or(DesignerError::NoSelection)?;
        let object = find_object(objects, id)?;

        if self.registry.has_editor(object.kind()) {
            self.state.mode = Mode::EditObject;
            self.state.handler = None;
        } else {
            debug!(kind = %object.kind(), "variant has no editor");
        }
        Ok(())
    }

    /// Explicit close command (Enter in path editing, or an external
    /// close request): back to `Free`.
    pub fn close_editor(&mut self) {
        self.state.mode = Mode::Free;
        self.state.gesture = None;
    }

    /// Moves the selected object to the front or back of the z-order.
    /// The selection is cleared before the list mutation and reassigned
    /// afterwards, never pointing at a transient ordering.
    pub fn arrange(
        &mut self,
        objects: &[DesignObject],
        direction: ArrangeDirection,
    ) -> Result<Vec<DesignObject>> {
        let id = self.state.selected.ok_or(DesignerError::NoSelection)?;
        let index = find_index(objects, id)?;

        self.state.selected = None;

        let mut updated = objects.to_vec();
        let object = updated.remove(index);
        match direction {
            ArrangeDirection::Front => updated.push(object),
            ArrangeDirection::Back => updated.insert(0, object),
        }

        self.state.selected = Some(id);
        Ok(updated)
    }

    /// Deletes the selected object and clears selection, hover, and the
    /// handler overlay.
    pub fn delete_selected(&mut self, objects: &[DesignObject]) -> Result<Vec<DesignObject>> {
        let id = self.state.selected.ok_or(DesignerError::NoSelection)?;
        let index = find_index(objects, id)?;

        let mut updated = objects.to_vec();
        updated.remove(index);

        self.state.selected = None;
        self.state.current = None;
        self.state.handler = None;
        self.state.gesture = None;
        Ok(updated)
    }

    /// Nudges the selected object by one unit on `axis` (ten when
    /// `coarse`), signed by `sign`.
    pub fn nudge(
        &mut self,
        objects: &[DesignObject],
        axis: Axis,
        sign: f64,
        coarse: bool,
    ) -> Result<Vec<DesignObject>> {
        let id = self.state.selected.ok_or(DesignerError::NoSelection)?;
        let index = find_index(objects, id)?;

        let step = sign * if coarse { 10.0 } else { 1.0 };
        let (dx, dy) = match axis {
            Axis::X => (step, 0.0),
            Axis::Y => (0.0, step),
        };

        let moved = objects[index].translated(dx, dy);
        if let Some(handler) = self.state.handler.as_mut() {
            handler.left += dx;
            handler.top += dy;
        }

        let mut updated = objects.to_vec();
        updated[index] = moved;
        Ok(updated)
    }

    /// The property-panel channel: writes one field of the selected
    /// object and proposes the replacement list. Position writes funnel
    /// through the same translate path gestures use, so path anchors stay
    /// consistent.
    pub fn set_field(
        &mut self,
        objects: &[DesignObject],
        field: &str,
        value: glyphkit_core::PropertyValue,
    ) -> Result<Vec<DesignObject>> {
        let id = self.state.selected.ok_or(DesignerError::NoSelection)?;
        let index = find_index(objects, id)?;

        let changed = objects[index].with_field(field, &value)?;

        let mut updated = objects.to_vec();
        updated[index] = changed;
        Ok(updated)
    }

    /// Handler geometry for an object: declared extent when the variant
    /// carries one, otherwise the renderer-measured rectangle. Objects
    /// are positioned canvas-local, so the centering offset shifts the
    /// overlay into stage space. A measure-only variant with no rendered
    /// rectangle is a core/renderer desync and fails loudly.
    fn handler_for(
        &self,
        object: &DesignObject,
        provider: &dyn BoundsProvider,
    ) -> Result<HandlerBox> {
        let (offset_x, offset_y) = self.canvas.canvas_offset();

        match (object.width(), object.height()) {
            (Some(width), Some(height)) => Ok(HandlerBox {
                left: object.x() + offset_x,
                top: object.y() + offset_y,
                width,
                height,
                rotate: object.rotation(),
            }),
            _ => {
                let rect = provider
                    .bounds(object.id())
                    .ok_or(DesignerError::MissingBounds {
                        id: object.id().as_uuid(),
                    })?;
                Ok(HandlerBox {
                    left: rect.left,
                    top: rect.top,
                    width: rect.width,
                    height: rect.height,
                    rotate: object.rotation(),
                })
            }
        }
    }
}

fn find_index(objects: &[DesignObject], id: ObjectId) -> Result<usize> {
    objects
        .iter()
        .position(|o| o.id() == id)
        .ok_or(DesignerError::UnknownObject { id: id.as_uuid() })
}

fn find_object(objects: &[DesignObject], id: ObjectId) -> Result<&DesignObject> {
    find_index(objects, id).map(|i| &objects[i])
}

/// Invalid geometry input never reaches the object list; the event is
/// dropped with a diagnostic instead.
fn discard_pointer_event(error: DesignerError) -> Result<Option<Vec<DesignObject>>> {
    warn!(error = %error, "discarding pointer event");
    Ok(None)
}
