//! UI module for the progress bar
//!
//! # Architecture
//!
//! The UI is organized into two layers:
//!
//! - **Primitives** (`primitives`): Low-level Widget trait implementations
//! - **Widgets** (`widgets`): Composable UI patterns without application logic

pub mod primitives;
pub mod theme;
pub mod widgets;
