//! # GlyphKit Designer
//!
//! The interaction core of GlyphKit: the object model, the interaction
//! state machine, and the geometric transform algorithms that decide,
//! frame by frame, what a pointer gesture does to a list of design
//! objects. The host owns the object list, rendering, property panels,
//! and font compilation; this crate only computes the next interaction
//! state and the next list.
//!
//! ## Architecture
//!
//! ```text
//! Designer (mode state machine, gesture snapshots, handler overlay)
//!   ├── CanvasGeometry (stage offset, grid snapping, pointer mapping)
//!   ├── ObjectRegistry (variant tag -> defaults + editor hook)
//!   ├── actions (pure drag / scale / rotate transforms)
//!   └── selection (hover targeting, overlap retargeting)
//!
//! DesignObject (Text | Rect | Circle | Path | Image)
//!   └── ObjectBase (position, extent, rotation, style)
//! ```
//!
//! Pointer and keyboard events flow into [`Designer`] and
//! [`Designer::dispatch`]; every mutation comes back as one proposed
//! replacement list, so the external owner can diff, persist, or undo.
//!
//! ## Usage
//!
//! ```rust
//! use glyphkit_core::Point;
//! use glyphkit_designer::{CanvasGeometry, Designer, ObjectKind};
//!
//! let mut designer = Designer::new(CanvasGeometry::new(250.0, 250.0));
//! let objects = Vec::new();
//!
//! designer.select_tool(ObjectKind::Rect);
//! let objects = designer
//!     .pointer_down(&objects, Point::new(10.0, 10.0))
//!     .unwrap()
//!     .expect("creation proposes a new list");
//! assert_eq!(objects.len(), 1);
//! ```

pub mod actions;
pub mod canvas;
pub mod commands;
pub mod designer;
pub mod model;
pub mod registry;
pub mod selection;

pub use actions::GestureSnapshot;
pub use canvas::CanvasGeometry;
pub use commands::{DispatchOutcome, EditorCommand};
pub use designer::{
    ArrangeDirection, Axis, Designer, GestureKind, HandlerBox, InteractionState, Mode,
};
pub use model::{
    CircleObject, DesignObject, ImageObject, ObjectBase, ObjectId, ObjectKind, PathObject,
    PathSegment, RectObject, TextObject,
};
pub use registry::{ObjectRegistry, ObjectTypeEntry};
pub use selection::BoundsProvider;
