use crate::config::PointPadConfig;
use crate::domain::PointCanvas;

/// Smallest slider value
pub const SLIDER_MIN: i32 = 0;
/// Largest slider value
pub const SLIDER_MAX: i32 = 10;

/// Everything the handlers may read or change
///
/// Passed explicitly to each handler; there is no other mutable UI state.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    /// The point-annotated canvas and its click history
    pub canvas: PointCanvas,
    /// State of the "And goodbye?" check button
    pub goodbye: bool,
    /// State of the switch
    pub switch_on: bool,
    /// Current slider position
    pub slider_value: i32,
    /// Whether the hamburger menu popover is open
    pub menu_open: bool,
}

impl AppContext {
    /// Initial widget state taken from the loaded configuration
    pub fn new(config: &PointPadConfig) -> Self {
        Self {
            canvas: PointCanvas::new(),
            goodbye: false,
            switch_on: config.switch_default,
            slider_value: config.slider_default.clamp(SLIDER_MIN, SLIDER_MAX),
            menu_open: false,
        }
    }
}
