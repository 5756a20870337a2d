//! Composite Components

pub mod data_table;
pub mod modal;

pub use modal::Modal;
