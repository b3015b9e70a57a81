// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form, preview, and
//! help views.
//!
//! The `App` struct wires together the domains (form store, submission,
//! preview, localization) and translates messages into side effects like
//! backend requests or file saves. The submission sequencing policy lives
//! here, next to the update loop, so the stale-result handling is easy to
//! audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::form;
use crate::i18n::fluent::I18n;
use crate::preview::Preview;
use crate::submission::{self, SubmissionError};
use crate::ui::navbar::BackendStatus;
use crate::ui::{help, notifications};
use iced::{window, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    form: form::State,
    /// Effective backend base URL (CLI flag, then config, then default).
    base_url: String,
    /// Whether a submission is currently in flight.
    submitting: bool,
    /// Sequence number of the most recently issued submission. Completions
    /// carrying an older number are discarded, so the newest submission
    /// always wins regardless of arrival order.
    latest_seq: u64,
    preview: Option<Preview>,
    error: Option<SubmissionError>,
    show_error_details: bool,
    backend: BackendStatus,
    help_state: help::State,
    notifications: notifications::Manager,
    /// Directory of the last successful save, used to seed the next dialog.
    last_save_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("submitting", &self.submitting)
            .field("latest_seq", &self.latest_seq)
            .field("has_preview", &self.preview.is_some())
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state from flags and the on-disk config, and kicks
    /// off the backend reachability probe.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        let i18n = I18n::new(flags.language, &config);

        let base_url = flags
            .endpoint
            .unwrap_or_else(|| config.base_url().to_string());

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        tracing::info!(%base_url, locale = %i18n.current_locale(), "starting up");

        let probe = Task::perform(submission::check_health(base_url.clone()), |result| {
            Message::HealthChecked(result.is_ok())
        });

        (
            Self {
                i18n,
                screen: Screen::Form,
                form: form::State::new(),
                base_url,
                submitting: false,
                latest_seq: 0,
                preview: None,
                error: None,
                show_error_details: false,
                backend: BackendStatus::Unknown,
                help_state: help::State::new(),
                notifications,
                last_save_dir: None,
            },
            probe,
        )
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        <Theme as iced::theme::Base>::default(iced::theme::Mode::default())
    }
}
