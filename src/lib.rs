//! Simple progress bar - a dual-layer progress bar widget for iced
//!
//! The bar draws a primary and a secondary progress fill over a rounded
//! background track and overlays a `"<primary>/<max>"` label.
//!
//! ```no_run
//! use simple_progressbar::ui::widgets::{ProgressBar, ProgressBarEvent};
//!
//! let mut bar = ProgressBar::new(&iced::Theme::Dark);
//! let _ = bar.update(ProgressBarEvent::SetPrimary(80));
//! assert_eq!(bar.label(), "80/100");
//! ```

pub mod app;
pub mod features;
pub mod ui;

pub use features::ProgressBarAttributes;
pub use ui::widgets::{ProgressBar, ProgressBarEvent};
