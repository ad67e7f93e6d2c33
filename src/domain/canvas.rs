//! The point-annotated canvas model
//!
//! Records click positions and describes the frame to paint for a given size.
//! Owns its click history; nothing else mutates it.

use super::geometry::Point;
use super::history::ClickHistory;
use crate::render::{DrawCommand, scene};

/// Token returned by every state change that needs the canvas repainted
#[must_use = "the canvas must be redrawn after this change"]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redraw;

/// Canvas state: the clicks recorded so far
#[derive(Clone, Debug, Default)]
pub struct PointCanvas {
    history: ClickHistory,
}

impl PointCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click at `(x, y)` in canvas-local coordinates
    ///
    /// Every value is accepted, including positions outside the canvas.
    pub fn handle_pointer_click(&mut self, x: f32, y: f32) -> Redraw {
        self.history.push(Point::new(x, y));
        log::debug!("Canvas click #{} at ({x}, {y})", self.history.len());
        Redraw
    }

    /// Drawing commands for a canvas of the given size
    pub fn render(&self, width: f32, height: f32) -> Vec<DrawCommand> {
        scene::build(&self.history, width, height)
    }

    pub fn history(&self) -> &ClickHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replayed_clicks_match_history() {
        let clicks = [(15.0, 15.0), (0.0, 0.0), (100.0, 100.0), (-3.5, 42.0)];
        let mut canvas = PointCanvas::new();
        for (x, y) in clicks {
            let _ = canvas.handle_pointer_click(x, y);
        }

        let recorded: Vec<(f32, f32)> = canvas.history().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(recorded, clicks.to_vec());
    }

    #[test]
    fn test_each_click_requests_one_redraw() {
        let mut canvas = PointCanvas::new();
        let redraws: Vec<Redraw> = (0..5)
            .map(|i| canvas.handle_pointer_click(i as f32, i as f32))
            .collect();
        assert_eq!(redraws.len(), 5);
        assert_eq!(canvas.history().len(), 5);
    }

    #[test]
    fn test_render_does_not_touch_history() {
        let mut canvas = PointCanvas::new();
        let _ = canvas.handle_pointer_click(15.0, 15.0);
        let before = canvas.history().clone();

        let first = canvas.render(200.0, 100.0);
        let second = canvas.render(200.0, 100.0);

        assert_eq!(first, second);
        assert_eq!(canvas.history(), &before);
    }

    #[test]
    fn test_render_tracks_new_clicks() {
        let mut canvas = PointCanvas::new();
        let empty = canvas.render(100.0, 100.0);
        let _ = canvas.handle_pointer_click(50.0, 50.0);
        let one = canvas.render(100.0, 100.0);

        assert_eq!(one.len(), empty.len() + 1);
        assert_eq!(one.iter().filter(|c| c.is_marker()).count(), 1);
    }
}
