//! Demo application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
use crate::ui::widgets::ProgressBar;
pub use message::Message;
pub use state::{App, PALETTES, Palette};

impl App {
    /// Create new application instance from loaded settings
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let theme = theme_for(&settings);
        let bar = ProgressBar::from_attributes(&settings.progress_bar, &theme);
        tracing::info!(
            "Progress bar ready: {} (secondary {})",
            bar.label(),
            bar.secondary_progress()
        );

        let app = Self {
            settings,
            bar,
            palette: None,
        };

        (app, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        theme_for(&self.settings)
    }

    /// Window title showing the current progress
    pub fn title(&self) -> String {
        format!("Simple Progress Bar - {}", self.bar.label())
    }
}

fn theme_for(settings: &Settings) -> Theme {
    if settings.dark_mode {
        Theme::Dark
    } else {
        Theme::Light
    }
}
