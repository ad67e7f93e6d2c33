//! Widgets and view builders for the main window

pub mod controls;
pub mod drawing;
pub mod header;
pub mod point_canvas;

pub use point_canvas::PointCanvasView;
