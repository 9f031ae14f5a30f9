// src/app/update/settings.rs
//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::theme;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleTheme => {
                self.settings.dark_mode = !self.settings.dark_mode;
                tracing::info!("Dark mode: {}", self.settings.dark_mode);

                self.retint_from_theme();

                if let Err(e) = self.settings.save() {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Re-apply theme colors to the fills no palette or attribute pins
    pub(crate) fn retint_from_theme(&mut self) {
        if self.palette.is_some() {
            return;
        }

        let theme = self.theme();
        let attributes = &self.settings.progress_bar;

        self.bar.set_bg_color(
            attributes
                .background_color
                .unwrap_or_else(|| theme::progress_background(&theme)),
        );
        self.bar.set_primary_color(
            attributes
                .primary_progress_color
                .unwrap_or_else(|| theme::progress_primary(&theme)),
        );
        self.bar.set_secondary_color(
            attributes
                .secondary_progress_color
                .unwrap_or_else(|| theme::progress_secondary(&theme)),
        );
    }
}

#[cfg(test)]
mod tests {
    use iced::{Color, Theme};

    use crate::app::{App, Message, PALETTES};
    use crate::features::Settings;
    use crate::ui::theme;

    fn app(settings: Settings) -> App {
        App::new(settings).0
    }

    #[test]
    fn test_retint_follows_theme() {
        let mut app = app(Settings::default());
        app.settings.dark_mode = false;
        app.retint_from_theme();

        assert_eq!(app.bar.bg_color(), theme::progress_background(&Theme::Light));
        assert_eq!(app.bar.secondary_color(), theme::progress_secondary(&Theme::Light));
    }

    #[test]
    fn test_retint_keeps_attribute_colors() {
        let mut settings = Settings::default();
        settings.progress_bar.background_color = Some(Color::BLACK);
        let mut app = app(settings);

        app.settings.dark_mode = false;
        app.retint_from_theme();

        assert_eq!(app.bar.bg_color(), Color::BLACK);
        assert_eq!(app.bar.secondary_color(), theme::progress_secondary(&Theme::Light));
    }

    #[test]
    fn test_retint_keeps_palette_colors() {
        let mut app = app(Settings::default());
        let _ = app.update(Message::CyclePalette);

        app.settings.dark_mode = false;
        app.retint_from_theme();

        assert_eq!(app.bar.bg_color(), PALETTES[0].background);
        assert_eq!(app.bar.primary_color(), PALETTES[0].primary);
        assert_eq!(app.bar.secondary_color(), PALETTES[0].secondary);
    }
}
