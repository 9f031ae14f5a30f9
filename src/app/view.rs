// src/app/view.rs
//! Main view rendering

use iced::widget::{Space, button, column, container, row, slider, text};
use iced::{Alignment, Element, Length, Padding};

use super::state::PALETTES;
use super::{App, Message};
use crate::ui::theme;

/// Upper bound of the max slider
const MAX_SLIDER_LIMIT: i32 = 500;

impl App {
    /// Render the demo window
    pub fn view(&self) -> Element<'_, Message> {
        let bar = self.bar.view().map(Message::Bar);

        let max = self.bar.max_progress();
        // Progress sliders need a non-empty range even when max is not positive
        let progress_range = 0..=max.max(1);

        let controls = column![
            labeled_slider(
                "Primary",
                slider(
                    progress_range.clone(),
                    self.bar.primary_progress().max(0),
                    Message::PrimaryChanged,
                )
                .style(theme::accent_slider)
                .into(),
                self.bar.primary_progress(),
            ),
            labeled_slider(
                "Secondary",
                slider(
                    progress_range,
                    self.bar.secondary_progress().max(0),
                    Message::SecondaryChanged,
                )
                .style(theme::accent_slider)
                .into(),
                self.bar.secondary_progress(),
            ),
            labeled_slider(
                "Max",
                slider(1..=MAX_SLIDER_LIMIT, max.clamp(1, MAX_SLIDER_LIMIT), Message::MaxChanged)
                    .style(theme::accent_slider)
                    .into(),
                max,
            ),
        ]
        .spacing(12);

        let palette_label = match self.palette {
            Some(index) => format!("Palette: {}", PALETTES[index].name),
            None => "Palette: Default".to_string(),
        };
        let theme_label = if self.settings.dark_mode {
            "Light mode"
        } else {
            "Dark mode"
        };

        let buttons = row![
            button(text(palette_label).size(13))
                .padding(Padding::from([6, 14]))
                .style(theme::secondary_button)
                .on_press(Message::CyclePalette),
            button(text(theme_label).size(13))
                .padding(Padding::from([6, 14]))
                .style(theme::secondary_button)
                .on_press(Message::ToggleTheme),
            Space::new().width(Length::Fill),
            button(text("Reset").size(13))
                .padding(Padding::from([6, 14]))
                .style(theme::secondary_button)
                .on_press(Message::Reset),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let panel = container(column![bar, controls, buttons].spacing(20))
            .padding(20)
            .width(Length::Fill)
            .style(theme::panel);

        container(
            column![text("Simple Progress Bar").size(20), panel]
                .spacing(16)
                .max_width(640),
        )
        .padding(24)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .style(theme::main_content)
        .into()
    }
}

/// Slider with a fixed-width caption and its current value
fn labeled_slider<'a>(
    label: &'a str,
    slider: Element<'a, Message>,
    value: i32,
) -> Element<'a, Message> {
    row![
        text(label).size(13).width(80),
        slider,
        text(value.to_string()).size(13).width(40),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
