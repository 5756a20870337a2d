//! Features - Vertical Feature Slices
//!
//! Each feature contains its page (or modal) and controller.

pub mod batch;
pub mod editor;
pub mod library;
pub mod settings;
