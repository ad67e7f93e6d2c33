//! Fixed layout of the canvas scene
//!
//! Constants shared by the command builder and the on-screen renderer.

use super::commands::Rgb;

/// Solid fill behind everything else
pub mod background {
    use super::Rgb;

    pub const COLOR: Rgb = Rgb::new(0.1, 0.1, 0.1);
}

/// Click markers
pub mod marker {
    use super::Rgb;

    /// Marker radius in logical pixels
    pub const RADIUS: f32 = 10.0;
    pub const COLOR: Rgb = Rgb::new(1.0, 0.0, 1.0);
}

/// Corner-to-corner line
pub mod diagonal {
    use super::Rgb;

    /// Stroke width in logical pixels
    pub const WIDTH: f32 = 3.0;
    pub const COLOR: Rgb = Rgb::new(0.5, 0.0, 0.5);
}

/// Filled box behind the label
pub mod label_box {
    use super::Rgb;
    use crate::domain::Rect;

    pub const RECT: Rect = Rect::new(20.0, 20.0, 50.0, 20.0);
    pub const COLOR: Rgb = Rgb::new(0.8, 0.8, 0.0);
}

/// Text label drawn on top of the box
pub mod label {
    use super::Rgb;
    use crate::domain::Point;

    pub const TEXT: &str = "Test";
    /// Left end of the text baseline
    pub const ORIGIN: Point = Point::new(25.0, 35.0);
    /// Font size in logical pixels
    pub const SIZE: f32 = 13.0;
    pub const COLOR: Rgb = Rgb::new(0.1, 0.1, 0.1);
}

/// Mesh rendering constants (for anti-aliased screen output)
pub mod mesh {
    /// Anti-aliasing feather width in pixels
    pub const FEATHER: f32 = 1.0;
    /// Number of segments used to approximate a marker circle
    pub const CIRCLE_SEGMENTS: usize = 32;
    /// Lines shorter than this produce no geometry
    pub const MIN_LINE_LENGTH: f32 = 0.1;
}
