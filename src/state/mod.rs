//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod config_state;
pub mod connection_state;
pub mod editor_state;
pub mod i18n_state;
pub mod library_state;
pub mod log_state;
pub mod selection_state;
pub mod wizard_state;
