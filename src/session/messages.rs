//! Message types for the main window
//!
//! Every widget interaction becomes one `UiEvent`. Handlers are looked up by
//! the event's `EventKind`.

use std::path::PathBuf;

use crate::domain::Point;

/// A user interaction with the main window
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The "Hello" button was pressed
    HelloClicked,
    /// The "And goodbye?" check button changed
    GoodbyeToggled(bool),
    /// The switch changed state
    SwitchToggled(bool),
    /// The slider moved to a new whole value
    SliderChanged(i32),
    /// The header-bar "Open" button was pressed
    OpenClicked,
    /// The file chooser finished; `None` when it was cancelled
    FileChosen(Option<PathBuf>),
    /// The hamburger button was pressed
    MenuToggled,
    /// The menu popover was dismissed
    MenuClosed,
    /// Menu item "Something"
    SomethingActivated,
    /// Menu item "Quit"
    QuitActivated,
    /// Left click on the canvas, canvas-local coordinates
    CanvasClicked(Point),
}

/// Discriminant of `UiEvent`, used as the handler registry key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Hello,
    Goodbye,
    Switch,
    Slider,
    Open,
    FileChosen,
    MenuToggle,
    MenuClose,
    Something,
    Quit,
    CanvasClick,
}

impl EventKind {
    /// All event kinds, in declaration order
    pub const ALL: [EventKind; 11] = [
        EventKind::Hello,
        EventKind::Goodbye,
        EventKind::Switch,
        EventKind::Slider,
        EventKind::Open,
        EventKind::FileChosen,
        EventKind::MenuToggle,
        EventKind::MenuClose,
        EventKind::Something,
        EventKind::Quit,
        EventKind::CanvasClick,
    ];
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::HelloClicked => EventKind::Hello,
            UiEvent::GoodbyeToggled(_) => EventKind::Goodbye,
            UiEvent::SwitchToggled(_) => EventKind::Switch,
            UiEvent::SliderChanged(_) => EventKind::Slider,
            UiEvent::OpenClicked => EventKind::Open,
            UiEvent::FileChosen(_) => EventKind::FileChosen,
            UiEvent::MenuToggled => EventKind::MenuToggle,
            UiEvent::MenuClosed => EventKind::MenuClose,
            UiEvent::SomethingActivated => EventKind::Something,
            UiEvent::QuitActivated => EventKind::Quit,
            UiEvent::CanvasClicked(_) => EventKind::CanvasClick,
        }
    }
}
