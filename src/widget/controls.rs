//! Control column shown to the left of the canvas

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_core::Alignment;
use cosmic::iced_widget::{column, row};
use cosmic::widget::{button, checkbox, slider, text, toggler};

use crate::fl;
use crate::session::messages::UiEvent;
use crate::session::state::{AppContext, SLIDER_MAX, SLIDER_MIN};

/// Gap between the switch and its label, in logical pixels
const SWITCH_LABEL_SPACING: u16 = 5;
/// Width of the slider column
const CONTROLS_WIDTH: f32 = 180.0;

/// Build the control column: button, check button, switch and slider
pub fn build_controls<'a>(ctx: &AppContext, space_xs: u16) -> Element<'a, UiEvent> {
    let hello = button::standard(fl!("hello")).on_press(UiEvent::HelloClicked);

    let goodbye = checkbox(fl!("and-goodbye"), ctx.goodbye).on_toggle(UiEvent::GoodbyeToggled);

    let switch_row = row![
        toggler(ctx.switch_on).on_toggle(UiEvent::SwitchToggled),
        text::body(fl!("a-switch")),
    ]
    .spacing(SWITCH_LABEL_SPACING)
    .align_y(Alignment::Center);

    let slider_label = text::caption(fl!("slider-value", value = ctx.slider_value));
    let value_slider = slider(SLIDER_MIN..=SLIDER_MAX, ctx.slider_value, UiEvent::SliderChanged)
        .step(1i32)
        .width(Length::Fill);

    column![hello, goodbye, switch_row, slider_label, value_slider]
        .spacing(space_xs)
        .width(Length::Fixed(CONTROLS_WIDTH))
        .into()
}
