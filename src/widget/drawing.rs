//! Shared drawing utilities for widget rendering
//!
//! Quad and text helpers used when translating canvas commands into renderer
//! calls. Each helper draws into its own layer so that calls composite in the
//! order they are made.

use cosmic::iced_core::{
    Border, Color, Rectangle, Renderer as _, Shadow, Size, renderer::Quad,
};

use crate::domain::{Point, Rect};

/// Fill `rect` (canvas-local) with a solid color
///
/// # Arguments
/// * `renderer` - The renderer to draw with
/// * `clip_bounds` - Widget bounds; nothing is drawn outside them
/// * `origin` - Top-left corner of the canvas in window coordinates
/// * `rect` - The rectangle to fill, canvas-local
/// * `color` - Fill color
pub fn fill_rect(
    renderer: &mut cosmic::Renderer,
    clip_bounds: Rectangle,
    origin: Point,
    rect: Rect,
    color: Color,
) {
    renderer.with_layer(clip_bounds, |renderer| {
        renderer.fill_quad(
            Quad {
                bounds: Rectangle {
                    x: origin.x + rect.x,
                    y: origin.y + rect.y,
                    width: rect.width,
                    height: rect.height,
                },
                border: Border::default(),
                shadow: Shadow::default(),
            },
            color,
        );
    });
}

/// Draw a single line of text with its baseline starting at `position`
///
/// `position` is in window coordinates. The bottom of the line box is placed
/// on the baseline.
pub fn draw_text(
    renderer: &mut cosmic::Renderer,
    clip_bounds: Rectangle,
    position: Point,
    content: &str,
    font_size: f32,
    color: Color,
) {
    use cosmic::iced_core::text::{Renderer as TextRenderer, Text};

    renderer.with_layer(clip_bounds, |renderer| {
        renderer.fill_text(
            Text {
                content: content.to_string(),
                bounds: Size::INFINITY,
                size: cosmic::iced_core::Pixels(font_size),
                line_height: cosmic::iced_core::text::LineHeight::Relative(1.0),
                font: cosmic::iced_core::Font::default(),
                horizontal_alignment: cosmic::iced::alignment::Horizontal::Left,
                vertical_alignment: cosmic::iced::alignment::Vertical::Bottom,
                shaping: cosmic::iced_core::text::Shaping::Advanced,
                wrapping: cosmic::iced_core::text::Wrapping::None,
            },
            cosmic::iced_core::Point::new(position.x, position.y),
            color,
            clip_bounds,
        );
    });
}
