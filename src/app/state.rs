//! Application state definitions

use iced::{Color, color};

use crate::features::Settings;
use crate::ui::widgets::ProgressBar;

/// Main application state
pub struct App {
    pub settings: Settings,
    pub bar: ProgressBar,
    /// Index into [`PALETTES`], `None` while the configured colors are shown
    pub palette: Option<usize>,
}

/// Fill colors applied together by the palette button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    pub background: Color,
    pub primary: Color,
    pub secondary: Color,
}

pub const PALETTES: [Palette; 3] = [
    Palette {
        name: "Ocean",
        background: color!(0x10263a),
        primary: color!(0x1e90ff),
        secondary: Color {
            a: 0.4,
            ..color!(0x1e90ff)
        },
    },
    Palette {
        name: "Forest",
        background: color!(0x1b2a1f),
        primary: color!(0x3cb371),
        secondary: Color {
            a: 0.5,
            ..color!(0x9acd32)
        },
    },
    Palette {
        name: "Ember",
        background: color!(0x2b1a14),
        primary: color!(0xff7f27),
        secondary: Color {
            a: 0.5,
            ..color!(0xffc04d)
        },
    },
];

impl App {
    /// Palette that follows the current one, wrapping around
    pub fn next_palette(&self) -> usize {
        self.palette.map_or(0, |index| (index + 1) % PALETTES.len())
    }
}
