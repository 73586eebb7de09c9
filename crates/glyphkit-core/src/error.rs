//! Error handling for GlyphKit.
//!
//! The interaction core performs no I/O, so there is no recoverable or
//! retryable category. Errors fall into two groups:
//! - Invariant violations (an operation requested in a state that cannot
//!   satisfy it, or a desync between the core and the external renderer).
//!   These indicate a bug in the surrounding integration and fail loudly.
//! - Invalid geometry inputs (non-finite pointer coordinates). Callers
//!   discard the offending event instead of propagating corrupted
//!   coordinates into the object list.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;
use uuid::Uuid;

/// Designer error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignerError {
    /// A command or transform needs a selected object and none exists
    #[error("No object is selected")]
    NoSelection,

    /// A gesture needs a current (hovered) object and none exists
    #[error("No current object to act on")]
    NoCurrentObject,

    /// A transform ran without a captured gesture snapshot
    #[error("No gesture snapshot captured")]
    NoGesture,

    /// A creation event fired while no tool was armed
    #[error("No creation tool is armed")]
    NoArmedTool,

    /// The tracked object id is not present in the supplied list
    #[error("Object {id} is not in the object list")]
    UnknownObject {
        /// The id the core was tracking.
        id: Uuid,
    },

    /// The renderer supplied no bounding rectangle for an object it renders
    #[error("No bounding rectangle known for object {id}")]
    MissingBounds {
        /// The id the bounds were requested for.
        id: Uuid,
    },

    /// Pointer coordinates were NaN or infinite
    #[error("Non-finite pointer coordinates ({x}, {y})")]
    NonFinitePointer {
        /// The x coordinate as delivered by the host.
        x: f64,
        /// The y coordinate as delivered by the host.
        y: f64,
    },

    /// The property channel named a field the variant does not carry
    #[error("Object kind {kind} has no field '{field}'")]
    UnknownField {
        /// The variant tag of the targeted object.
        kind: String,
        /// The field name supplied by the property panel.
        field: String,
    },

    /// The property channel supplied a value of the wrong type
    #[error("Invalid value type for field '{field}'")]
    InvalidFieldValue {
        /// The field the value was written to.
        field: String,
    },
}

/// Convenience result type for GlyphKit operations.
pub type Result<T> = std::result::Result<T, DesignerError>;
