// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the mood picker.
//!
//! The `App` struct hosts the picker component: it routes picker messages
//! through a single update entrypoint, interprets the effects the picker
//! emits, and owns the concerns the widget treats as external collaborators
//! (theme resolution, window settings, the animation tick subscription, and
//! the session-local record of confirmed moods).

use crate::config;
use crate::ui::design_tokens::{animation, spacing};
use crate::ui::mood_picker::{self, component, MoodOption};
use crate::ui::styles;
use crate::ui::theming::AppTheme;
use iced::widget::Container;
use iced::{alignment, time, window, Element, Length, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 400;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

const WINDOW_TITLE: &str = "Mood Picker";

/// Root Iced application state.
pub struct App {
    picker: component::State,
    theme: AppTheme,
    /// Moods confirmed this session, oldest first. Held in memory only;
    /// mood history is never written to disk.
    session_log: Vec<MoodOption>,
}

/// Top-level messages consumed by [`App::update`]. The single variant
/// forwards picker messages while keeping one update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Picker(component::Message),
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            picker: component::State::new(),
            theme: AppTheme::default(),
            session_log: Vec::new(),
        }
    }
}

impl App {
    /// Initializes application state from the persisted theme preference.
    fn new() -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let app = App {
            theme: AppTheme::new(config.theme_mode),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        if self.theme.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Ticks are only needed while the Choose button emphasis is mid
    /// transition; the subscription shuts off once it settles.
    fn subscription(&self) -> Subscription<Message> {
        if self.picker.is_animating() {
            time::every(animation::TICK_INTERVAL)
                .map(|now| Message::Picker(component::Message::Tick(now)))
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Picker(msg) => {
                let effect = self.picker.update(msg);
                self.apply_picker_effect(effect)
            }
        }
    }

    fn apply_picker_effect(&mut self, effect: component::Effect) -> Task<Message> {
        match effect {
            component::Effect::MoodChosen(option) => {
                self.session_log.push(option);
                Task::none()
            }
            component::Effect::None => Task::none(),
        }
    }

    /// Moods confirmed since launch, oldest first.
    #[must_use]
    pub fn session_log(&self) -> &[MoodOption] {
        &self.session_log
    }

    fn view(&self) -> Element<'_, Message> {
        let picker = mood_picker::view(&self.picker, &self.theme).map(Message::Picker);

        Container::new(picker)
            .style(styles::container::surface(
                self.theme.colors.surface_primary,
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::SM)
            .into()
    }
}
