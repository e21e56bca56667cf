//! Declarative draw commands - frozen output of one render call.
//!
//! Commands are plain data with no references back to the simulation.
//! Emission order is z-order; adapters must not reorder them.

use super::colors::Color;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Outline paired with a filled shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// One shape to render this frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Straight line segment
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: f32,
    },
    /// Filled rectangle, rotated about its own center, then stroked.
    /// Rotating about the center (not the top-left corner) is what keeps
    /// a fighter's facing direction visually anchored in place.
    Rect {
        center: Vec2,
        /// Width/height. May be non-positive for degenerate sprites.
        size: Vec2,
        /// Degrees, clockwise from facing right.
        rotation: f32,
        fill: Color,
        stroke: Stroke,
    },
}
