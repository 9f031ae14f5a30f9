// src/app/update/controls.rs
//! Progress bar control message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, PALETTES};
use crate::ui::widgets::ProgressBarEvent;

impl App {
    /// Handle messages that drive the progress bar
    pub fn handle_controls(&mut self, message: &Message) -> Option<Task<Message>> {
        let event = match message {
            Message::Bar(event) => *event,
            Message::PrimaryChanged(value) => ProgressBarEvent::SetPrimary(*value),
            Message::SecondaryChanged(value) => ProgressBarEvent::SetSecondary(*value),
            Message::MaxChanged(value) => ProgressBarEvent::SetMax(*value),

            Message::CyclePalette => {
                let index = self.next_palette();
                let palette = PALETTES[index];
                tracing::info!("Switching to {} palette", palette.name);

                self.palette = Some(index);
                self.bar.set_bg_color(palette.background);
                self.bar.set_primary_color(palette.primary);
                self.bar.set_secondary_color(palette.secondary);
                return Some(Task::none());
            }

            Message::Reset => {
                self.palette = None;
                let theme = self.theme();
                self.bar.apply_attributes(&self.settings.progress_bar, &theme);
                return Some(Task::none());
            }

            _ => return None,
        };

        Some(self.bar.update(event).map(Message::Bar))
    }
}
