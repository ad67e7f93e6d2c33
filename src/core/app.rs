use std::path::PathBuf;

use cosmic::iced::{Length, window};
use cosmic::iced_widget::row;
use cosmic::{ApplicationExt, Task, app};

use crate::config::PointPadConfig;
use crate::console;
use crate::fl;
use crate::session::dispatch::{Effect, HandlerRegistry};
use crate::session::messages::UiEvent;
use crate::session::state::AppContext;
use crate::widget::{PointCanvasView, controls, header};

pub(crate) fn run() -> cosmic::iced::Result {
    let config = PointPadConfig::load();
    let (width, height) = config.window_size();
    let settings = cosmic::app::Settings::default().size(cosmic::iced::Size::new(width, height));
    cosmic::app::run::<App>(settings, config)
}

pub struct App {
    pub core: app::Core,
    /// Widget state and the canvas, handed to every handler
    pub ctx: AppContext,
    /// Event handlers, assembled once in `init`
    handlers: HandlerRegistry,
}

impl App {
    /// Turn a handler's effect into runtime work
    fn apply(&mut self, effect: Effect) -> Task<cosmic::Action<UiEvent>> {
        match effect {
            // The runtime redraws every window after an update
            Effect::None | Effect::Redraw => Task::none(),
            Effect::CloseWindow => match self.core.main_window_id() {
                Some(id) => window::close(id),
                None => {
                    log::warn!("Close requested but there is no main window");
                    Task::none()
                }
            },
            Effect::OpenFileChooser => Task::perform(pick_file(), |path| {
                cosmic::Action::App(UiEvent::FileChosen(path))
            }),
        }
    }

    fn update_title(&mut self) -> Task<cosmic::Action<UiEvent>> {
        let title = fl!("app-title");
        self.set_header_title(title.clone());
        match self.core.main_window_id() {
            Some(id) => self.set_window_title(title, id),
            None => Task::none(),
        }
    }
}

/// Ask the desktop for a file; `None` when the dialog is dismissed
async fn pick_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title(fl!("open"))
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = PointPadConfig;

    type Message = UiEvent;

    const APP_ID: &'static str = PointPadConfig::ID;

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(
        core: app::Core,
        flags: Self::Flags,
    ) -> (Self, cosmic::iced::Task<cosmic::Action<Self::Message>>) {
        let mut app = Self {
            core,
            ctx: AppContext::new(&flags),
            handlers: HandlerRegistry::standard(),
        };
        log::debug!("Registered handlers: {:?}", app.handlers);

        let task = app.update_title();
        (app, task)
    }

    fn header_start(&self) -> Vec<cosmic::Element<'_, Self::Message>> {
        let spacing = self.core.system_theme().cosmic().spacing;
        header::build_header_start(self.ctx.menu_open, spacing.space_xxs)
    }

    fn view(&self) -> cosmic::Element<'_, Self::Message> {
        let spacing = self.core.system_theme().cosmic().spacing;

        let canvas = PointCanvasView::new(&self.ctx.canvas).on_click(UiEvent::CanvasClicked);

        row![controls::build_controls(&self.ctx, spacing.space_xs), canvas]
            .spacing(spacing.space_s)
            .padding(spacing.space_s)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
    ) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        log::debug!("{:?}", message);
        let reaction = self.handlers.dispatch(&mut self.ctx, message);
        console::print_lines(&reaction.lines);
        self.apply(reaction.effect)
    }
}
