//! Canvas geometry: stage/canvas sizing, centering offset, grid snapping,
//! and mapping of host pointer coordinates into stage-local space.

use serde::{Deserialize, Serialize};
use tracing::warn;

use glyphkit_core::{DesignerError, Point, Result};

/// Declared canvas size, optional larger stage size, and grid settings.
///
/// A fixed-size canvas may sit centered inside a larger stage; the
/// centering offset positions handler overlays and object coordinates
/// relative to the stage. With no explicit stage the two are equal and
/// the offset is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasGeometry {
    width: f64,
    height: f64,
    stage_width: f64,
    stage_height: f64,
    grid_size: f64,
    /// Screen-space top-left of the stage, as last reported by the host.
    origin: Point,
}

impl CanvasGeometry {
    /// Creates a canvas whose stage equals the canvas itself.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            stage_width: width,
            stage_height: height,
            grid_size: 1.0,
            origin: Point::new(0.0, 0.0),
        }
    }

    /// Creates a canvas centered inside a larger stage.
    pub fn with_stage(width: f64, height: f64, stage_width: f64, stage_height: f64) -> Self {
        Self {
            stage_width,
            stage_height,
            ..Self::new(width, height)
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn stage_width(&self) -> f64 {
        self.stage_width
    }

    pub fn stage_height(&self) -> f64 {
        self.stage_height
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Sets the grid size. Values that are not finite and positive are
    /// rejected and the previous grid is kept.
    pub fn set_grid_size(&mut self, grid_size: f64) {
        if grid_size.is_finite() && grid_size > 0.0 {
            self.grid_size = grid_size;
        } else {
            warn!(grid_size, "ignoring invalid grid size");
        }
    }

    /// Records the stage's screen-space top-left corner. The host reports
    /// this whenever the stage moves or scrolls.
    pub fn set_origin(&mut self, origin: Point) {
        if origin.is_finite() {
            self.origin = origin;
        } else {
            warn!("ignoring non-finite stage origin");
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Offset that centers the canvas inside the stage.
    pub fn canvas_offset(&self) -> (f64, f64) {
        (
            (self.stage_width - self.width) / 2.0,
            (self.stage_height - self.height) / 2.0,
        )
    }

    /// Snaps one coordinate to the lower grid line: `v - (v % grid)`.
    /// With the default grid of 1 this truncates fractional pointer
    /// positions without visible snapping.
    pub fn snap_axis(&self, v: f64) -> f64 {
        v - (v % self.grid_size)
    }

    /// Snaps a point to the grid, independently per axis.
    pub fn snap(&self, p: Point) -> Point {
        Point::new(self.snap_axis(p.x), self.snap_axis(p.y))
    }

    /// Maps a raw screen-space pointer position into snapped stage-local
    /// coordinates. Non-finite input is rejected so corrupted coordinates
    /// never reach the object list.
    pub fn pointer_to_stage(&self, screen: Point) -> Result<Point> {
        if !screen.is_finite() {
            return Err(DesignerError::NonFinitePointer {
                x: screen.x,
                y: screen.y,
            });
        }
        Ok(self.snap(Point::new(
            screen.x - self.origin.x,
            screen.y - self.origin.y,
        )))
    }
}
