//! UI Components
//!
//! Reusable building blocks: primitives, composites and the app layout.

pub mod composite;
pub mod layout;
pub mod primitives;
