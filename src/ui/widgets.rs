//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Own event type**: Widgets expose an `Event` the host maps into its messages
//! - **Composable**: Build on primitives and iced's built-in widgets

pub mod progress_bar;

pub use progress_bar::{Event as ProgressBarEvent, LayoutGuides, ProgressBar};
