//! Handlers for main window events
//!
//! Each handler takes the application context and the event it was
//! registered for, and returns what to print and what to do next.

use super::dispatch::{Effect, Reaction};
use super::messages::UiEvent;
use super::state::{AppContext, SLIDER_MAX, SLIDER_MIN};

pub fn hello(ctx: &mut AppContext, _event: UiEvent) -> Reaction {
    let reaction = Reaction::say("Hello world");
    if ctx.goodbye {
        reaction
            .and_say("Goodbye world!")
            .with_effect(Effect::CloseWindow)
    } else {
        reaction
    }
}

pub fn goodbye_toggled(ctx: &mut AppContext, event: UiEvent) -> Reaction {
    if let UiEvent::GoodbyeToggled(checked) = event {
        ctx.goodbye = checked;
    }
    Reaction::none()
}

pub fn switch_switched(ctx: &mut AppContext, event: UiEvent) -> Reaction {
    let UiEvent::SwitchToggled(state) = event else {
        return Reaction::none();
    };
    ctx.switch_on = state;
    Reaction::say(format!(
        "The switch has been switched {}",
        if state { "on" } else { "off" }
    ))
}

pub fn slider_changed(ctx: &mut AppContext, event: UiEvent) -> Reaction {
    let UiEvent::SliderChanged(value) = event else {
        return Reaction::none();
    };
    ctx.slider_value = value.clamp(SLIDER_MIN, SLIDER_MAX);
    Reaction::say(ctx.slider_value.to_string())
}

pub fn open_clicked(ctx: &mut AppContext, _event: UiEvent) -> Reaction {
    ctx.menu_open = false;
    Reaction::effect(Effect::OpenFileChooser)
}

pub fn file_chosen(_ctx: &mut AppContext, event: UiEvent) -> Reaction {
    match event {
        UiEvent::FileChosen(Some(path)) => {
            Reaction::say(format!("Selected file: {}", path.display()))
        }
        _ => {
            log::debug!("File chooser dismissed");
            Reaction::none()
        }
    }
}

pub fn menu_toggled(ctx: &mut AppContext, _event: UiEvent) -> Reaction {
    ctx.menu_open = !ctx.menu_open;
    Reaction::none()
}

pub fn menu_closed(ctx: &mut AppContext, _event: UiEvent) -> Reaction {
    ctx.menu_open = false;
    Reaction::none()
}

pub fn print_something(ctx: &mut AppContext, _event: UiEvent) -> Reaction {
    ctx.menu_open = false;
    Reaction::say("Something!")
}

pub fn quit(ctx: &mut AppContext, _event: UiEvent) -> Reaction {
    ctx.menu_open = false;
    Reaction::effect(Effect::CloseWindow)
}

pub fn canvas_clicked(ctx: &mut AppContext, event: UiEvent) -> Reaction {
    let UiEvent::CanvasClicked(point) = event else {
        return Reaction::none();
    };
    Reaction::effect(ctx.canvas.handle_pointer_click(point.x, point.y).into())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::Point;

    #[test]
    fn test_hello_without_goodbye() {
        let mut ctx = AppContext::default();
        let reaction = hello(&mut ctx, UiEvent::HelloClicked);
        assert_eq!(reaction.lines, vec!["Hello world".to_string()]);
        assert_eq!(reaction.effect, Effect::None);
    }

    #[test]
    fn test_hello_with_goodbye_closes_window() {
        let mut ctx = AppContext::default();
        goodbye_toggled(&mut ctx, UiEvent::GoodbyeToggled(true));

        let reaction = hello(&mut ctx, UiEvent::HelloClicked);

        assert_eq!(
            reaction.lines,
            vec!["Hello world".to_string(), "Goodbye world!".to_string()]
        );
        assert_eq!(reaction.effect, Effect::CloseWindow);
    }

    #[test]
    fn test_goodbye_can_be_unchecked() {
        let mut ctx = AppContext::default();
        goodbye_toggled(&mut ctx, UiEvent::GoodbyeToggled(true));
        goodbye_toggled(&mut ctx, UiEvent::GoodbyeToggled(false));
        assert_eq!(hello(&mut ctx, UiEvent::HelloClicked).effect, Effect::None);
    }

    #[test]
    fn test_switch_reports_state() {
        let mut ctx = AppContext::default();

        let off = switch_switched(&mut ctx, UiEvent::SwitchToggled(false));
        assert_eq!(off.lines, vec!["The switch has been switched off".to_string()]);
        assert!(!ctx.switch_on);

        let on = switch_switched(&mut ctx, UiEvent::SwitchToggled(true));
        assert_eq!(on.lines, vec!["The switch has been switched on".to_string()]);
        assert!(ctx.switch_on);
    }

    #[test]
    fn test_slider_prints_whole_value() {
        let mut ctx = AppContext::default();
        let reaction = slider_changed(&mut ctx, UiEvent::SliderChanged(7));
        assert_eq!(reaction.lines, vec!["7".to_string()]);
        assert_eq!(ctx.slider_value, 7);
    }

    #[test]
    fn test_slider_value_clamped_to_range() {
        let mut ctx = AppContext::default();
        let reaction = slider_changed(&mut ctx, UiEvent::SliderChanged(-3));
        assert_eq!(reaction.lines, vec!["0".to_string()]);
        assert_eq!(ctx.slider_value, SLIDER_MIN);
    }

    #[test]
    fn test_open_requests_file_chooser() {
        let mut ctx = AppContext {
            menu_open: true,
            ..Default::default()
        };
        let reaction = open_clicked(&mut ctx, UiEvent::OpenClicked);
        assert_eq!(reaction, Reaction::effect(Effect::OpenFileChooser));
        assert!(!ctx.menu_open);
    }

    #[test]
    fn test_file_chosen_prints_path() {
        let mut ctx = AppContext::default();
        let path = PathBuf::from("/tmp/notes.txt");

        let chosen = file_chosen(&mut ctx, UiEvent::FileChosen(Some(path)));
        assert_eq!(chosen.lines, vec!["Selected file: /tmp/notes.txt".to_string()]);

        let cancelled = file_chosen(&mut ctx, UiEvent::FileChosen(None));
        assert!(cancelled.lines.is_empty());
    }

    #[test]
    fn test_menu_popover_state() {
        let mut ctx = AppContext::default();
        menu_toggled(&mut ctx, UiEvent::MenuToggled);
        assert!(ctx.menu_open);
        menu_toggled(&mut ctx, UiEvent::MenuToggled);
        assert!(!ctx.menu_open);

        menu_toggled(&mut ctx, UiEvent::MenuToggled);
        menu_closed(&mut ctx, UiEvent::MenuClosed);
        assert!(!ctx.menu_open);
    }

    #[test]
    fn test_menu_items_close_popover() {
        let mut ctx = AppContext {
            menu_open: true,
            ..Default::default()
        };
        let something = print_something(&mut ctx, UiEvent::SomethingActivated);
        assert_eq!(something.lines, vec!["Something!".to_string()]);
        assert!(!ctx.menu_open);

        ctx.menu_open = true;
        let reaction = quit(&mut ctx, UiEvent::QuitActivated);
        assert_eq!(reaction.effect, Effect::CloseWindow);
        assert!(!ctx.menu_open);
    }

    #[test]
    fn test_canvas_click_records_point() {
        let mut ctx = AppContext::default();
        for (x, y) in [(0.0, 0.0), (100.0, 100.0)] {
            let reaction = canvas_clicked(&mut ctx, UiEvent::CanvasClicked(Point::new(x, y)));
            assert_eq!(reaction.effect, Effect::Redraw);
            assert!(reaction.lines.is_empty());
        }
        assert_eq!(
            ctx.canvas.history().as_slice(),
            &[Point::new(0.0, 0.0), Point::new(100.0, 100.0)]
        );
    }

    #[test]
    fn test_mismatched_event_is_ignored() {
        let mut ctx = AppContext::default();
        let reaction = canvas_clicked(&mut ctx, UiEvent::HelloClicked);
        assert_eq!(reaction, Reaction::none());
        assert!(ctx.canvas.history().is_empty());
    }
}
