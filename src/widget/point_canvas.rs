//! PointCanvasView widget for painting the point-annotated canvas
//!
//! This widget handles:
//! - Rendering the command list produced by `PointCanvas::render`
//! - Left clicks, reported in canvas-local coordinates

use cosmic::{
    Element,
    iced::mouse,
    iced_core::{
        Clipboard, Layout, Length, Rectangle, Shell, Size, Widget, event, layout,
        widget::{Tree, tree},
    },
};

use super::drawing;
use crate::{
    domain::{Point, PointCanvas},
    render::{DrawCommand, mesh},
};

/// On-screen view of a `PointCanvas`
pub struct PointCanvasView<'a, Msg> {
    canvas: &'a PointCanvas,
    on_click: Option<Box<dyn Fn(Point) -> Msg + 'a>>,
}

impl<'a, Msg> PointCanvasView<'a, Msg> {
    pub fn new(canvas: &'a PointCanvas) -> Self {
        Self {
            canvas,
            on_click: None,
        }
    }

    /// Set the message produced by a left click
    pub fn on_click(mut self, handler: impl Fn(Point) -> Msg + 'a) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    fn draw_command(
        renderer: &mut cosmic::Renderer,
        bounds: Rectangle,
        origin: Point,
        command: DrawCommand,
    ) {
        match command {
            DrawCommand::FillRect { rect, color } => {
                drawing::fill_rect(renderer, bounds, origin, rect, color.into());
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                let disc = mesh::build_circle_mesh(center, radius, color.into());
                mesh::draw_solid_mesh(renderer, bounds, origin, disc);
            }
            DrawCommand::StrokeLine {
                from,
                to,
                width,
                color,
            } => {
                if let Some(line) = mesh::build_line_mesh(from, to, width, color.into()) {
                    mesh::draw_solid_mesh(renderer, bounds, origin, line);
                }
            }
            DrawCommand::DrawText {
                origin: baseline,
                text,
                size,
                color,
            } => {
                let position = baseline.translate(origin.x, origin.y);
                drawing::draw_text(renderer, bounds, position, &text, size, color.into());
            }
        }
    }
}

impl<'a, Msg: Clone + 'static> Widget<Msg, cosmic::Theme, cosmic::Renderer>
    for PointCanvasView<'a, Msg>
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<()>()
    }

    fn state(&self) -> tree::State {
        tree::State::None
    }

    fn layout(
        &self,
        _tree: &mut Tree,
        _renderer: &cosmic::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut cosmic::Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced_core::renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let origin = Point::new(bounds.x, bounds.y);

        // One layer per command: iced batches primitives by kind inside a
        // layer, which would break the paint order.
        for command in self.canvas.render(bounds.width, bounds.height) {
            Self::draw_command(renderer, bounds, origin, command);
        }
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: cosmic::iced_core::Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &cosmic::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Msg>,
        _viewport: &Rectangle,
    ) -> event::Status {
        let Some(on_click) = &self.on_click else {
            return event::Status::Ignored;
        };

        if let cosmic::iced_core::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) =
            event
            && let Some(pos) = cursor.position_in(layout.bounds())
        {
            shell.publish(on_click(Point::new(pos.x, pos.y)));
            return event::Status::Captured;
        }

        event::Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &cosmic::Renderer,
    ) -> mouse::Interaction {
        if self.on_click.is_some() && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Msg: Clone + 'static> From<PointCanvasView<'a, Msg>> for Element<'a, Msg> {
    fn from(canvas: PointCanvasView<'a, Msg>) -> Self {
        Self::new(canvas)
    }
}
