//! Typed event dispatch
//!
//! A `HandlerRegistry` maps each `EventKind` to a plain function. The
//! registry is built once when the application starts.

use std::collections::HashMap;

use super::handlers;
use super::messages::{EventKind, UiEvent};
use super::state::AppContext;
use crate::domain::Redraw;

/// Follow-up work the application shell performs after a handler ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Repaint the canvas
    Redraw,
    /// Close the main window
    CloseWindow,
    /// Show the file chooser
    OpenFileChooser,
}

impl From<Redraw> for Effect {
    fn from(_: Redraw) -> Self {
        Effect::Redraw
    }
}

/// Outcome of handling one event
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reaction {
    /// Lines to print on standard output, in order
    pub lines: Vec<String>,
    pub effect: Effect,
}

impl Reaction {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn effect(effect: Effect) -> Self {
        Self {
            lines: Vec::new(),
            effect,
        }
    }

    pub fn say(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            effect: Effect::None,
        }
    }

    /// Append another output line
    pub fn and_say(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }
}

/// Event handler signature
pub type Handler = fn(&mut AppContext, UiEvent) -> Reaction;

/// Lookup table from event kind to handler
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventKind, Handler>,
}

impl HandlerRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry used by the main window
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register(EventKind::Hello, handlers::hello)
            .register(EventKind::Goodbye, handlers::goodbye_toggled)
            .register(EventKind::Switch, handlers::switch_switched)
            .register(EventKind::Slider, handlers::slider_changed)
            .register(EventKind::Open, handlers::open_clicked)
            .register(EventKind::FileChosen, handlers::file_chosen)
            .register(EventKind::MenuToggle, handlers::menu_toggled)
            .register(EventKind::MenuClose, handlers::menu_closed)
            .register(EventKind::Something, handlers::print_something)
            .register(EventKind::Quit, handlers::quit)
            .register(EventKind::CanvasClick, handlers::canvas_clicked);
        registry
    }

    /// Register `handler` for `kind`, replacing any previous one
    pub fn register(&mut self, kind: EventKind, handler: Handler) -> &mut Self {
        if self.handlers.insert(kind, handler).is_some() {
            log::debug!("Replaced handler for {:?}", kind);
        }
        self
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Run the handler registered for the event's kind
    pub fn dispatch(&self, ctx: &mut AppContext, event: UiEvent) -> Reaction {
        let kind = event.kind();
        match self.handlers.get(&kind) {
            Some(handler) => handler(ctx, event),
            None => {
                log::warn!("No handler registered for {:?}", kind);
                Reaction::none()
            }
        }
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point;

    #[test]
    fn test_standard_registry_covers_every_kind() {
        let registry = HandlerRegistry::standard();
        for kind in EventKind::ALL {
            assert!(registry.contains(kind), "missing handler for {:?}", kind);
        }
    }

    #[test]
    fn test_unregistered_event_is_ignored() {
        let registry = HandlerRegistry::new();
        let mut ctx = AppContext::default();

        let reaction = registry.dispatch(&mut ctx, UiEvent::CanvasClicked(Point::new(1.0, 2.0)));

        assert_eq!(reaction, Reaction::none());
        assert!(ctx.canvas.history().is_empty());
    }

    #[test]
    fn test_register_replaces_handler() {
        fn silent(_: &mut AppContext, _: UiEvent) -> Reaction {
            Reaction::say("replaced")
        }

        let mut registry = HandlerRegistry::standard();
        registry.register(EventKind::Hello, silent);

        let reaction = registry.dispatch(&mut AppContext::default(), UiEvent::HelloClicked);
        assert_eq!(reaction.lines, vec!["replaced".to_string()]);
    }

    #[test]
    fn test_dispatch_routes_canvas_click() {
        let registry = HandlerRegistry::standard();
        let mut ctx = AppContext::default();

        let reaction = registry.dispatch(&mut ctx, UiEvent::CanvasClicked(Point::new(15.0, 15.0)));

        assert_eq!(reaction.effect, Effect::Redraw);
        assert_eq!(ctx.canvas.history().as_slice(), &[Point::new(15.0, 15.0)]);
    }

    #[test]
    fn test_reaction_builders() {
        let reaction = Reaction::say("a")
            .and_say("b")
            .with_effect(Effect::CloseWindow);
        assert_eq!(reaction.lines, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(reaction.effect, Effect::CloseWindow);
        assert_eq!(Reaction::effect(Effect::Redraw).lines.len(), 0);
    }
}
