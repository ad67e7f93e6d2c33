//! Primitive drawing commands
//!
//! The canvas describes each frame as a flat list of these. They carry no
//! framework types so that the list can be built and inspected without a
//! renderer.

use crate::domain::{Point, Rect};

/// Opaque RGB color, channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// A single drawing operation in canvas-local coordinates
///
/// Commands are applied in list order; later commands paint over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Rgb,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f32,
        color: Rgb,
    },
    /// Text whose baseline starts at `origin`
    DrawText {
        origin: Point,
        text: String,
        size: f32,
        color: Rgb,
    },
}

impl DrawCommand {
    /// Check if this command is a click marker
    pub fn is_marker(&self) -> bool {
        matches!(self, DrawCommand::FillCircle { .. })
    }
}
