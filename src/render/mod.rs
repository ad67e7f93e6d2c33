//! Canvas rendering module
//!
//! This module contains:
//! - Drawing commands describing a frame without framework types
//! - The fixed scene layout and the command builder
//! - Mesh building using iced (for on-screen output)

pub mod commands;
pub mod geometry;
pub mod mesh;
pub mod scene;

pub use commands::{DrawCommand, Rgb};
