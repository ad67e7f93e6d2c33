//! Pure domain types with minimal dependencies
//!
//! Types here have no framework dependencies (cosmic, iced, etc.) so they can
//! be exercised without a window.

pub mod canvas;
pub mod geometry;
pub mod history;

pub use canvas::*;
pub use geometry::*;
pub use history::*;
