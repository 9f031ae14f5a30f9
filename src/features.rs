//! Feature modules - logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod attributes;
pub mod settings;

pub use attributes::{AttributeError, ProgressBarAttributes};
pub use settings::{Settings, SettingsError};
