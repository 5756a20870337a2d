//! Settings Feature
//!
//! Backend connection settings, API token and UI language.

pub mod controller;
pub mod page;
