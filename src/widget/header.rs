//! Header bar items: the "Open" button and the hamburger menu

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_widget::column;
use cosmic::widget::{button, container, icon, popover, text, tooltip};

use crate::fl;
use crate::session::messages::UiEvent;

const ICON_SIZE: u16 = 16;

fn icon_button<'a>(name: &'static str, on_press: UiEvent, space_xs: u16) -> Element<'a, UiEvent> {
    button::custom(
        icon::Icon::from(icon::from_name(name).size(ICON_SIZE))
            .width(Length::Fixed(ICON_SIZE as f32))
            .height(Length::Fixed(ICON_SIZE as f32)),
    )
    .class(cosmic::theme::Button::Icon)
    .on_press(on_press)
    .padding(space_xs)
    .into()
}

/// Build the items packed at the start of the header bar
pub fn build_header_start<'a>(menu_open: bool, space_xs: u16) -> Vec<Element<'a, UiEvent>> {
    let open = tooltip(
        icon_button("document-open-symbolic", UiEvent::OpenClicked, space_xs),
        text::body(fl!("open")),
        tooltip::Position::Bottom,
    );

    let hamburger = tooltip(
        icon_button("open-menu-symbolic", UiEvent::MenuToggled, space_xs),
        text::body(fl!("main-menu")),
        tooltip::Position::Bottom,
    );

    let menu: Element<'a, UiEvent> = if menu_open {
        popover(hamburger)
            .popup(build_menu(space_xs))
            .on_close(UiEvent::MenuClosed)
            .into()
    } else {
        hamburger.into()
    };

    vec![open.into(), menu]
}

/// Menu popup content
fn build_menu<'a>(space_xs: u16) -> Element<'a, UiEvent> {
    let something = button::text(fl!("menu-something"))
        .on_press(UiEvent::SomethingActivated)
        .width(Length::Fill);
    let quit = button::text(fl!("menu-quit"))
        .on_press(UiEvent::QuitActivated)
        .width(Length::Fill);

    container(column![something, quit].spacing(space_xs))
        .padding(space_xs)
        .width(Length::Fixed(160.0))
        .class(cosmic::theme::Container::Dropdown)
        .into()
}
