//! Helper Utilities
//!
//! Common utilities used across the application.

pub mod bounded;
pub mod fs;
pub mod string;

pub use bounded::*;
pub use fs::*;
pub use string::*;
