//! Eventing - service to UI event plumbing

pub mod app_event;

pub use app_event::AppEvent;
