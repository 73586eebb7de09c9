//! Object-type registry: maps a variant tag to its default attribute set
//! and to whether the variant owns a dedicated sub-editor.
//!
//! Per-variant behavior is dispatched through this lookup table rather
//! than virtual methods, keeping the state machine variant-agnostic. The
//! core consults the table at exactly two points: defaults at creation
//! time, the editor flag at `EditObject` entry. Hosts may register a
//! subset of the built-ins (the glyph creator registers only rectangles
//! and paths).

use std::collections::HashMap;

use glyphkit_core::Point;

use crate::model::{
    CircleObject, DesignObject, ImageObject, ObjectId, ObjectKind, PathObject, RectObject,
    TextObject,
};

type CreateFn = fn(ObjectId, Point) -> DesignObject;

/// Registered behavior for one variant tag.
#[derive(Clone)]
pub struct ObjectTypeEntry {
    /// Builds a new object at a position with the variant's defaults.
    create: CreateFn,
    /// Whether the variant has a dedicated sub-editor (e.g. bezier paths).
    pub has_editor: bool,
}

/// Lookup table from variant tag to creation defaults and editor hook.
#[derive(Clone)]
pub struct ObjectRegistry {
    entries: HashMap<ObjectKind, ObjectTypeEntry>,
}

impl ObjectRegistry {
    /// Registry with all five built-in variants.
    pub fn builtin() -> Self {
        let mut registry = Self {
            entries: HashMap::new(),
        };
        registry.register(ObjectKind::Text, |id, p| {
            DesignObject::Text(TextObject::new(id, p))
        });
        registry.register(ObjectKind::Rect, |id, p| {
            DesignObject::Rect(RectObject::new(id, p))
        });
        registry.register(ObjectKind::Circle, |id, p| {
            DesignObject::Circle(CircleObject::new(id, p))
        });
        registry.register_with_editor(ObjectKind::Path, |id, p| {
            DesignObject::Path(PathObject::new(id, p))
        });
        registry.register(ObjectKind::Image, |id, p| {
            DesignObject::Image(ImageObject::new(id, p))
        });
        registry
    }

    /// Registry restricted to a subset of the built-in variants.
    pub fn with_kinds(kinds: &[ObjectKind]) -> Self {
        let builtin = Self::builtin();
        let entries = builtin
            .entries
            .into_iter()
            .filter(|(kind, _)| kinds.contains(kind))
            .collect();
        Self { entries }
    }

    fn register(&mut self, kind: ObjectKind, create: CreateFn) {
        self.entries.insert(
            kind,
            ObjectTypeEntry {
                create,
                has_editor: false,
            },
        );
    }

    fn register_with_editor(&mut self, kind: ObjectKind, create: CreateFn) {
        self.entries.insert(
            kind,
            ObjectTypeEntry {
                create,
                has_editor: true,
            },
        );
    }

    pub fn contains(&self, kind: ObjectKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Instantiates a new object of `kind` at `position` with a fresh id
    /// and the variant's default attributes. Returns `None` for
    /// unregistered kinds.
    pub fn create(&self, kind: ObjectKind, position: Point) -> Option<DesignObject> {
        self.entries
            .get(&kind)
            .map(|entry| (entry.create)(ObjectId::new(), position))
    }

    /// Whether `kind` declares a dedicated sub-editor.
    pub fn has_editor(&self, kind: ObjectKind) -> bool {
        self.entries.get(&kind).is_some_and(|e| e.has_editor)
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
