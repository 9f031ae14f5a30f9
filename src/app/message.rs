//! Application messages

use crate::ui::widgets::ProgressBarEvent;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Event produced by the progress bar itself (resize, deferred relayout)
    Bar(ProgressBarEvent),

    // ============ Controls ============
    /// Primary progress slider moved
    PrimaryChanged(i32),
    /// Secondary progress slider moved
    SecondaryChanged(i32),
    /// Max progress slider moved
    MaxChanged(i32),
    /// Switch to the next color palette
    CyclePalette,
    /// Restore the bar from the configured attributes
    Reset,

    // ============ Settings ============
    /// Toggle between dark and light theme
    ToggleTheme,
}
