//! Builds the command list for one canvas frame

use super::commands::DrawCommand;
use super::geometry::{background, diagonal, label, label_box, marker};
use crate::domain::{ClickHistory, Rect};

/// Build the drawing commands for a `width` x `height` canvas
///
/// Order: background, one marker per click (oldest first), the diagonal, the
/// label box and the label text. The result depends only on the arguments.
pub fn build(history: &ClickHistory, width: f32, height: f32) -> Vec<DrawCommand> {
    let canvas = Rect::from_size(width, height);
    let mut commands = Vec::with_capacity(history.len() + 4);

    commands.push(DrawCommand::FillRect {
        rect: canvas,
        color: background::COLOR,
    });

    commands.extend(history.iter().map(|point| DrawCommand::FillCircle {
        center: *point,
        radius: marker::RADIUS,
        color: marker::COLOR,
    }));

    commands.push(DrawCommand::StrokeLine {
        from: canvas.origin(),
        to: canvas.far_corner(),
        width: diagonal::WIDTH,
        color: diagonal::COLOR,
    });

    commands.push(DrawCommand::FillRect {
        rect: label_box::RECT,
        color: label_box::COLOR,
    });

    commands.push(DrawCommand::DrawText {
        origin: label::ORIGIN,
        text: label::TEXT.to_string(),
        size: label::SIZE,
        color: label::COLOR,
    });

    commands
}
