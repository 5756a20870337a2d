//! Primitive Components
//!
//! Small reusable widgets with no application state of their own.

pub mod button;
pub mod checkbox;
pub mod select;
pub mod text_input;

pub use button::*;
pub use checkbox::*;
pub use select::*;
pub use text_input::*;
