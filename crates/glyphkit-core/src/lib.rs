//! # GlyphKit Core
//!
//! Core types and utilities shared across GlyphKit crates.
//! Provides the fundamental abstractions for 2D geometry, object
//! identity, property values, and error handling.

pub mod error;
pub mod geometry;
pub mod property;

pub use error::{DesignerError, Result};
pub use geometry::{BoundingRect, Point};
pub use property::PropertyValue;
