//! Mode transition tests for the interaction state machine.

use std::collections::HashMap;

use glyphkit_core::{BoundingRect, DesignerError, Point};
use glyphkit_designer::{
    CanvasGeometry, DesignObject, Designer, GestureKind, Mode, ObjectId, ObjectKind,
};

type Bounds = HashMap<ObjectId, BoundingRect>;

fn designer() -> Designer {
    Designer::new(CanvasGeometry::new(250.0, 250.0))
}

fn bounds_for(objects: &[DesignObject]) -> Bounds {
    objects
        .iter()
        .map(|o| {
            (
                o.id(),
                BoundingRect::new(o.x(), o.y(), o.width().unwrap_or(50.0), o.height().unwrap_or(50.0)),
            )
        })
        .collect()
}

#[test]
fn test_initial_state_is_free() {
    let designer = designer();
    assert_eq!(designer.mode(), Mode::Free);
    assert_eq!(designer.selected(), None);
    assert_eq!(designer.current(), None);
    assert!(designer.handler().is_none());
}

#[test]
fn test_select_tool_arms_draw_and_clears_targets() {
    let mut designer = designer();
    designer.select_tool(ObjectKind::Rect);

    assert_eq!(designer.mode(), Mode::Draw);
    assert_eq!(designer.state().selected_tool, Some(ObjectKind::Rect));
    assert_eq!(designer.current(), None);
    assert_eq!(designer.selected(), None);
}

#[test]
fn test_draw_pointer_down_creates_and_enters_scale() {
    let mut designer = designer();
    designer.select_tool(ObjectKind::Rect);

    let objects = designer
        .pointer_down(&[], Point::new(10.0, 10.0))
        .unwrap()
        .expect("creation proposes a list");

    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].kind(), ObjectKind::Rect);
    assert_eq!(objects[0].x(), 10.0);
    assert_eq!(objects[0].width(), Some(5.0));

    // Rect has no dedicated editor: freehand initial sizing.
    assert_eq!(designer.mode(), Mode::Scale);
    assert_eq!(designer.selected(), Some(objects[0].id()));
    assert_eq!(designer.current(), Some(objects[0].id()));
    assert_eq!(designer.state().selected_tool, None);
}

#[test]
fn test_draw_pointer_down_enters_editor_for_paths() {
    let mut designer = designer();
    designer.select_tool(ObjectKind::Path);

    let objects = designer
        .pointer_down(&[], Point::new(30.0, 40.0))
        .unwrap()
        .unwrap();

    assert_eq!(objects[0].kind(), ObjectKind::Path);
    assert_eq!(designer.mode(), Mode::EditObject);
}

#[test]
fn test_pointer_down_outside_draw_only_drops_selection() {
    let mut designer = designer();
    let update = designer.pointer_down(&[], Point::new(5.0, 5.0)).unwrap();
    assert!(update.is_none());
    assert_eq!(designer.mode(), Mode::Free);
}

#[test]
fn test_pointer_up_ends_gesture() {
    let mut designer = designer();
    designer.select_tool(ObjectKind::Rect);
    let objects = designer
        .pointer_down(&[], Point::new(0.0, 0.0))
        .unwrap()
        .unwrap();

    assert_eq!(designer.mode(), Mode::Scale);
    designer.pointer_up();
    assert_eq!(designer.mode(), Mode::Free);
    assert!(designer.state().gesture.is_none());
    // The object survives pointer-up.
    assert_eq!(objects.len(), 1);
}

#[test]
fn test_hover_updates_current_only_in_free_mode() {
    let mut designer = designer();
    designer.select_tool(ObjectKind::Rect);
    let objects = designer
        .pointer_down(&[], Point::new(10.0, 10.0))
        .unwrap()
        .unwrap();
    let bounds = bounds_for(&objects);

    // Still in Scale mode: a pointer-move runs the transform, it does not
    // retarget the hover.
    let before = designer.current();
    designer
        .pointer_move(&objects, Point::new(12.0, 12.0), &bounds)
        .unwrap();
    assert_eq!(designer.current(), before);

    designer.pointer_up();
    let miss = designer
        .pointer_move(&objects, Point::new(200.0, 200.0), &bounds)
        .unwrap();
    assert!(miss.is_none());
    assert_eq!(designer.current(), None);

    designer
        .pointer_move(&objects, Point::new(12.0, 12.0), &bounds)
        .unwrap();
    assert_eq!(designer.current(), Some(objects[0].id()));
    assert!(designer.handler().is_some());
}

#[test]
fn test_pointer_leave_clears_hover_but_not_active_drag() {
    let mut designer = designer();
    designer.select_tool(ObjectKind::Rect);
    let objects = designer
        .pointer_down(&[], Point::new(10.0, 10.0))
        .unwrap()
        .unwrap();
    designer.pointer_up();
    let bounds = bounds_for(&objects);

    designer
        .pointer_move(&objects, Point::new(12.0, 12.0), &bounds)
        .unwrap();
    designer
        .start_gesture(&objects, GestureKind::Drag, Point::new(12.0, 12.0))
        .unwrap();

    // Mid-drag the leave is ignored; drags keep tracking outside the
    // canvas bounds.
    designer.pointer_leave();
    assert_eq!(designer.current(), Some(objects[0].id()));

    designer.pointer_up();
    designer.pointer_leave();
    assert_eq!(designer.current(), None);
    assert!(designer.handler().is_none());
}

#[test]
fn test_open_and_close_editor() {
    let mut designer = designer();
    designer.select_tool(ObjectKind::Path);
    let objects = designer
        .pointer_down(&[], Point::new(0.0, 0.0))
        .unwrap()
        .unwrap();

    designer.close_editor();
    assert_eq!(designer.mode(), Mode::Free);

    // Double-click re-enters the editor for variants that declare one.
    designer.open_editor(&objects).unwrap();
    assert_eq!(designer.mode(), Mode::EditObject);
    assert!(designer.handler().is_none());
}

#[test]
fn test_open_editor_noop_for_plain_variants() {
    let mut designer = designer();
    designer.select_tool(ObjectKind::Rect);
    let objects = designer
        .pointer_down(&[], Point::new(0.0, 0.0))
        .unwrap()
        .unwrap();
    designer.pointer_up();

    designer.open_editor(&objects).unwrap();
    assert_eq!(designer.mode(), Mode::Free);
}

#[test]
fn test_gesture_start_without_hover_is_loud() {
    let mut designer = designer();
    let err = designer
        .start_gesture(&[], GestureKind::Drag, Point::new(0.0, 0.0))
        .unwrap_err();
    assert_eq!(err, DesignerError::NoCurrentObject);
}

#[test]
fn test_non_finite_pointer_event_is_discarded() {
    let mut designer = designer();
    designer.select_tool(ObjectKind::Rect);

    let update = designer
        .pointer_down(&[], Point::new(f64::NAN, 10.0))
        .unwrap();
    assert!(update.is_none());
    // The tool stays armed; the event never happened.
    assert_eq!(designer.mode(), Mode::Draw);
    assert_eq!(designer.state().selected_tool, Some(ObjectKind::Rect));
}

#[test]
fn test_reset_returns_to_initial_state() {
    let mut designer = designer();
    designer.select_tool(ObjectKind::Rect);
    designer
        .pointer_down(&[], Point::new(0.0, 0.0))
        .unwrap()
        .unwrap();

    designer.reset();
    assert_eq!(designer.mode(), Mode::Free);
    assert_eq!(designer.selected(), None);
    assert_eq!(designer.current(), None);
    assert!(designer.state().gesture.is_none());
}
