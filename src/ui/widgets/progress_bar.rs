//! Dual-layer progress bar widget
//!
//! Holds the progress values, the fill colors and the two layout guides the
//! fills are anchored to. All mutation goes through the setters (or
//! [`ProgressBar::update`]), and every setter immediately re-applies what it
//! affects: guides, label or tint.
//!
//! The bar is rendered as the [`ProgressLayers`] primitive with the
//! `"<primary>/<max>"` label centered on top.

use std::time::Duration;

use iced::widget::{container, stack, text};
use iced::{Color, Element, Length, Size, Task, Theme};

use crate::features::ProgressBarAttributes;
use crate::ui::primitives::progress_layers::{self, ProgressLayers};
use crate::ui::theme;

pub const PROGRESS_DEFAULT: i32 = 50;
pub const SECONDARY_DEFAULT: i32 = 70;
pub const MAX_DEFAULT: i32 = 100;

/// Delay between a size change and the relayout it triggers, so the host
/// layout pass can settle first
pub const RELAYOUT_DELAY: Duration = Duration::from_millis(15);

/// Height of the drawn bar
pub const BAR_HEIGHT: f32 = 28.0;

/// Progress values shared by both fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    pub primary: i32,
    pub secondary: i32,
    pub max: i32,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            primary: PROGRESS_DEFAULT,
            secondary: SECONDARY_DEFAULT,
            max: MAX_DEFAULT,
        }
    }
}

/// Visual attributes of the three fill regions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleState {
    pub background: Color,
    pub primary: Color,
    pub secondary: Color,
    pub corner_radius: f32,
    pub padding: f32,
}

impl StyleState {
    /// Theme default colors, square corners and no padding
    pub fn themed(theme: &Theme) -> Self {
        Self {
            background: theme::progress_background(theme),
            primary: theme::progress_primary(theme),
            secondary: theme::progress_secondary(theme),
            corner_radius: 0.0,
            padding: 0.0,
        }
    }
}

/// Positions of the fill edges as fractions of the widget width
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutGuides {
    pub primary: f32,
    pub secondary: f32,
}

/// Fraction of the width a fill for `value` reaches, capped at 1.0
///
/// There is no lower bound: negative values give a negative fraction. A
/// non-positive `max` yields 0.0 rather than an infinite or NaN guide.
pub fn guide_fraction(value: i32, max: i32) -> f32 {
    if max <= 0 {
        tracing::warn!("Progress max is {}, collapsing guide to 0", max);
        return 0.0;
    }

    (value as f32 / max as f32).min(1.0)
}

/// Mutations understood by [`ProgressBar::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    SetPrimary(i32),
    SetSecondary(i32),
    SetMax(i32),
    SetBackgroundColor(Color),
    SetPrimaryColor(Color),
    SetSecondaryColor(Color),
    /// The drawn bounds changed size
    Resized(Size),
    /// Deferred relayout after a resize
    Relayout,
}

/// Dual-layer progress bar state
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    progress: ProgressState,
    style: StyleState,
    guides: LayoutGuides,
    label: String,
    view_size: Size,
}

impl ProgressBar {
    /// Progress bar with default values and the theme's colors
    pub fn new(theme: &Theme) -> Self {
        Self::from_attributes(&ProgressBarAttributes::default(), theme)
    }

    /// Build a progress bar from a styling attribute bag
    ///
    /// Unset colors fall back to the theme. `max` is applied before the
    /// progress values so they clamp against the configured maximum.
    pub fn from_attributes(attributes: &ProgressBarAttributes, theme: &Theme) -> Self {
        let mut bar = Self {
            progress: ProgressState::default(),
            style: StyleState::themed(theme),
            guides: LayoutGuides::default(),
            label: String::new(),
            view_size: Size::ZERO,
        };
        bar.apply_attributes(attributes, theme);
        bar
    }

    /// Re-apply an attribute bag to an existing bar
    ///
    /// Every value the bag leaves unset goes back to its default, so this
    /// also serves as a reset. The last reported view size is kept.
    pub fn apply_attributes(&mut self, attributes: &ProgressBarAttributes, theme: &Theme) {
        let defaults = StyleState::themed(theme);

        self.style = StyleState {
            background: attributes.background_color.unwrap_or(defaults.background),
            primary: attributes.primary_progress_color.unwrap_or(defaults.primary),
            secondary: attributes
                .secondary_progress_color
                .unwrap_or(defaults.secondary),
            corner_radius: attributes.corner_radius.unwrap_or(0.0),
            padding: attributes.padding.map(f32::from).unwrap_or(0.0),
        };

        self.set_max_progress(attributes.progress_max.unwrap_or(MAX_DEFAULT));
        self.set_primary_progress(attributes.progress_primary.unwrap_or(PROGRESS_DEFAULT));
        self.set_secondary_progress(
            attributes
                .progress_secondary
                .unwrap_or(SECONDARY_DEFAULT),
        );
    }

    pub fn primary_progress(&self) -> i32 {
        self.progress.primary
    }

    pub fn secondary_progress(&self) -> i32 {
        self.progress.secondary
    }

    pub fn max_progress(&self) -> i32 {
        self.progress.max
    }

    pub fn bg_color(&self) -> Color {
        self.style.background
    }

    pub fn primary_color(&self) -> Color {
        self.style.primary
    }

    pub fn secondary_color(&self) -> Color {
        self.style.secondary
    }

    pub fn corner_radius(&self) -> f32 {
        self.style.corner_radius
    }

    pub fn padding(&self) -> f32 {
        self.style.padding
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn style(&self) -> StyleState {
        self.style
    }

    pub fn guides(&self) -> LayoutGuides {
        self.guides
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Width of the bar as last reported by the renderer
    pub fn view_width(&self) -> f32 {
        self.view_size.width
    }

    /// Set primary progress, clamped to at most `max`
    pub fn set_primary_progress(&mut self, value: i32) {
        self.progress.primary = self.clamp_to_max(value);
        self.guides.primary = guide_fraction(self.progress.primary, self.progress.max);
        self.update_label();
    }

    /// Set secondary progress, clamped to at most `max`
    pub fn set_secondary_progress(&mut self, value: i32) {
        self.progress.secondary = self.clamp_to_max(value);
        self.guides.secondary = guide_fraction(self.progress.secondary, self.progress.max);
    }

    /// Set the maximum and re-layout both fills against it
    ///
    /// Stored progress values are kept as they are; only their guides are
    /// capped at the full width.
    pub fn set_max_progress(&mut self, value: i32) {
        self.progress.max = value;
        self.relayout();
    }

    pub fn set_bg_color(&mut self, color: Color) {
        self.style.background = color;
    }

    pub fn set_primary_color(&mut self, color: Color) {
        self.style.primary = color;
    }

    pub fn set_secondary_color(&mut self, color: Color) {
        self.style.secondary = color;
    }

    /// Recompute both guides and the label from the current state
    pub fn relayout(&mut self) {
        self.guides = LayoutGuides {
            primary: guide_fraction(self.progress.primary, self.progress.max),
            secondary: guide_fraction(self.progress.secondary, self.progress.max),
        };
        self.update_label();
        tracing::debug!(
            "Relayout {} (secondary {}) guides {:?}",
            self.label,
            self.progress.secondary,
            self.guides
        );
    }

    /// Apply an [`Event`]
    ///
    /// A width change schedules a single [`Event::Relayout`] after
    /// [`RELAYOUT_DELAY`]. Earlier pending relayouts are not cancelled; a
    /// relayout only reads current state, so running it twice is harmless.
    pub fn update(&mut self, event: Event) -> Task<Event> {
        match event {
            Event::SetPrimary(value) => self.set_primary_progress(value),
            Event::SetSecondary(value) => self.set_secondary_progress(value),
            Event::SetMax(value) => self.set_max_progress(value),
            Event::SetBackgroundColor(color) => self.set_bg_color(color),
            Event::SetPrimaryColor(color) => self.set_primary_color(color),
            Event::SetSecondaryColor(color) => self.set_secondary_color(color),
            Event::Resized(size) => {
                let width_changed = size.width != self.view_size.width;
                self.view_size = size;

                if width_changed {
                    return Task::perform(
                        async { tokio::time::sleep(RELAYOUT_DELAY).await },
                        |_| Event::Relayout,
                    );
                }
            }
            Event::Relayout => self.relayout(),
        }

        Task::none()
    }

    /// Render the fills with the label centered on top
    pub fn view(&self) -> Element<'_, Event> {
        let layers = ProgressLayers::new(self.guides.primary, self.guides.secondary)
            .style(progress_layers::Style {
                background: self.style.background,
                primary: self.style.primary,
                secondary: self.style.secondary,
                corner_radius: self.style.corner_radius,
                padding: self.style.padding,
            })
            .height(BAR_HEIGHT)
            .on_resize(Event::Resized);

        let label = container(
            text(self.label.as_str())
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme::progress_label(theme)),
                }),
        )
        .center(Length::Fill);

        stack![layers, label]
            .width(Length::Fill)
            .height(BAR_HEIGHT)
            .into()
    }

    fn clamp_to_max(&self, value: i32) -> i32 {
        if value > self.progress.max {
            tracing::debug!("Clamping progress {} to max {}", value, self.progress.max);
            self.progress.max
        } else {
            if value < 0 {
                tracing::debug!("Negative progress {} kept as is", value);
            }
            value
        }
    }

    fn update_label(&mut self) {
        self.label = format!("{}/{}", self.progress.primary, self.progress.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> ProgressBar {
        ProgressBar::new(&Theme::Dark)
    }

    #[test]
    fn test_defaults() {
        let bar = bar();
        assert_eq!(bar.primary_progress(), 50);
        assert_eq!(bar.secondary_progress(), 70);
        assert_eq!(bar.max_progress(), 100);
        assert_eq!(bar.label(), "50/100");
        assert_eq!(bar.guides().primary, 0.5);
        assert_eq!(bar.guides().secondary, 0.7);
        assert_eq!(bar.corner_radius(), 0.0);
        assert_eq!(bar.padding(), 0.0);
    }

    #[test]
    fn test_default_colors_follow_theme() {
        let bar = bar();
        assert_eq!(bar.bg_color(), theme::progress_background(&Theme::Dark));
        assert_eq!(bar.primary_color(), theme::progress_primary(&Theme::Dark));
        assert_eq!(bar.secondary_color(), theme::progress_secondary(&Theme::Dark));

        let light = ProgressBar::new(&Theme::Light);
        assert_eq!(light.bg_color(), theme::progress_background(&Theme::Light));
    }

    #[test]
    fn test_value_within_max_is_kept() {
        let mut bar = bar();
        for value in [0, 1, 33, 99, 100] {
            bar.set_primary_progress(value);
            assert_eq!(bar.primary_progress(), value);
            bar.set_secondary_progress(value);
            assert_eq!(bar.secondary_progress(), value);
        }
    }

    #[test]
    fn test_value_above_max_clamps() {
        let mut bar = bar();
        bar.set_primary_progress(150);
        assert_eq!(bar.primary_progress(), 100);
        assert_eq!(bar.guides().primary, 1.0);
        assert_eq!(bar.label(), "100/100");

        bar.set_secondary_progress(i32::MAX);
        assert_eq!(bar.secondary_progress(), 100);
        assert_eq!(bar.guides().secondary, 1.0);
    }

    #[test]
    fn test_negative_progress_is_not_clamped() {
        let mut bar = bar();
        bar.set_primary_progress(-20);
        assert_eq!(bar.primary_progress(), -20);
        assert_eq!(bar.guides().primary, -0.2);
        assert_eq!(bar.label(), "-20/100");
    }

    #[test]
    fn test_guide_fraction() {
        assert_eq!(guide_fraction(50, 100), 0.5);
        assert_eq!(guide_fraction(150, 100), 1.0);
        assert_eq!(guide_fraction(0, 100), 0.0);
        assert_eq!(guide_fraction(-50, 100), -0.5);
    }

    #[test]
    fn test_guide_fraction_non_positive_max() {
        assert_eq!(guide_fraction(10, 0), 0.0);
        assert_eq!(guide_fraction(10, -5), 0.0);
    }

    #[test]
    fn test_secondary_does_not_touch_label() {
        let mut bar = bar();
        bar.set_secondary_progress(10);
        assert_eq!(bar.label(), "50/100");
    }

    #[test]
    fn test_set_max_relayouts_both_guides() {
        let mut bar = bar();
        bar.set_max_progress(50);
        assert_eq!(bar.label(), "50/50");
        assert_eq!(bar.guides().primary, 1.0);
        // Secondary stays 70 and is capped visually
        assert_eq!(bar.secondary_progress(), 70);
        assert_eq!(bar.guides().secondary, 1.0);

        bar.set_max_progress(200);
        assert_eq!(bar.label(), "50/200");
        assert_eq!(bar.guides().primary, 0.25);
        assert_eq!(bar.guides().secondary, 0.35);
    }

    #[test]
    fn test_lowering_max_keeps_stored_progress() {
        let mut bar = bar();
        bar.set_max_progress(30);
        assert_eq!(bar.primary_progress(), 50);
        assert_eq!(bar.label(), "50/30");
        assert_eq!(bar.guides().primary, 1.0);
    }

    #[test]
    fn test_label_tracks_primary_and_max() {
        let mut bar = bar();
        bar.set_primary_progress(7);
        assert_eq!(bar.label(), "7/100");
        bar.set_max_progress(8);
        assert_eq!(bar.label(), "7/8");
        bar.set_primary_progress(9);
        assert_eq!(bar.label(), "8/8");
    }

    #[test]
    fn test_color_setters_touch_one_region() {
        let mut bar = bar();
        let before = bar.style();
        let guides = bar.guides();

        bar.set_primary_color(Color::WHITE);
        assert_eq!(bar.primary_color(), Color::WHITE);
        assert_eq!(bar.bg_color(), before.background);
        assert_eq!(bar.secondary_color(), before.secondary);

        bar.set_bg_color(Color::BLACK);
        assert_eq!(bar.bg_color(), Color::BLACK);
        assert_eq!(bar.primary_color(), Color::WHITE);
        assert_eq!(bar.secondary_color(), before.secondary);

        let _ = bar.update(Event::SetSecondaryColor(Color::TRANSPARENT));
        assert_eq!(bar.secondary_color(), Color::TRANSPARENT);
        assert_eq!(bar.primary_color(), Color::WHITE);
        assert_eq!(bar.guides(), guides);
    }

    #[test]
    fn test_from_attributes() {
        let attributes = ProgressBarAttributes {
            corner_radius: Some(4.0),
            background_color: Some(Color::BLACK),
            padding: Some(3),
            progress_max: Some(10),
            progress_primary: Some(4),
            progress_secondary: Some(25),
            ..Default::default()
        };

        let bar = ProgressBar::from_attributes(&attributes, &Theme::Light);
        assert_eq!(bar.corner_radius(), 4.0);
        assert_eq!(bar.padding(), 3.0);
        assert_eq!(bar.bg_color(), Color::BLACK);
        assert_eq!(bar.primary_color(), theme::progress_primary(&Theme::Light));
        assert_eq!(bar.max_progress(), 10);
        assert_eq!(bar.primary_progress(), 4);
        // Clamped against the configured max, not the default one
        assert_eq!(bar.secondary_progress(), 10);
        assert_eq!(bar.label(), "4/10");
        assert_eq!(bar.guides().primary, 0.4);
        assert_eq!(bar.guides().secondary, 1.0);
    }

    #[test]
    fn test_default_progress_clamps_to_small_max() {
        let attributes = ProgressBarAttributes {
            progress_max: Some(60),
            ..Default::default()
        };

        let bar = ProgressBar::from_attributes(&attributes, &Theme::Dark);
        assert_eq!(bar.primary_progress(), 50);
        assert_eq!(bar.secondary_progress(), 60);
        assert_eq!(bar.label(), "50/60");
    }

    #[test]
    fn test_apply_attributes_resets_and_keeps_size() {
        let mut bar = bar();
        let _ = bar.update(Event::Resized(Size::new(240.0, 24.0)));
        bar.set_max_progress(10);
        bar.set_primary_color(Color::WHITE);

        bar.apply_attributes(&ProgressBarAttributes::default(), &Theme::Dark);
        assert_eq!(bar.max_progress(), 100);
        assert_eq!(bar.primary_progress(), 50);
        assert_eq!(bar.label(), "50/100");
        assert_eq!(bar.primary_color(), theme::progress_primary(&Theme::Dark));
        assert_eq!(bar.view_width(), 240.0);
    }

    #[test]
    fn test_update_applies_setters() {
        let mut bar = bar();
        let _ = bar.update(Event::SetPrimary(20));
        let _ = bar.update(Event::SetSecondary(300));
        let _ = bar.update(Event::SetMax(40));

        assert_eq!(bar.primary_progress(), 20);
        assert_eq!(bar.secondary_progress(), 100);
        assert_eq!(bar.label(), "20/40");
        assert_eq!(bar.guides().primary, 0.5);
        assert_eq!(bar.guides().secondary, 1.0);
    }

    #[test]
    fn test_resize_records_size() {
        let mut bar = bar();
        let _ = bar.update(Event::Resized(Size::new(320.0, 24.0)));
        assert_eq!(bar.view_width(), 320.0);

        let _ = bar.update(Event::Resized(Size::new(320.0, 30.0)));
        assert_eq!(bar.view_width(), 320.0);
    }

    #[test]
    fn test_width_change_schedules_one_relayout() {
        assert_eq!(RELAYOUT_DELAY, Duration::from_millis(15));

        let mut bar = bar();
        assert_eq!(bar.update(Event::Resized(Size::new(320.0, 24.0))).units(), 1);
        // Height alone does not relayout
        assert_eq!(bar.update(Event::Resized(Size::new(320.0, 30.0))).units(), 0);
        assert_eq!(bar.update(Event::Resized(Size::new(200.0, 30.0))).units(), 1);

        assert_eq!(bar.update(Event::SetPrimary(10)).units(), 0);
        assert_eq!(bar.update(Event::Relayout).units(), 0);
    }

    #[test]
    fn test_relayout_is_idempotent() {
        let mut bar = bar();
        bar.set_primary_progress(12);
        let snapshot = bar.clone();

        let _ = bar.update(Event::Relayout);
        let _ = bar.update(Event::Relayout);
        assert_eq!(bar, snapshot);
    }
}
