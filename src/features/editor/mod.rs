//! Editor Feature
//!
//! Single-file tag editor: parsed TAF metadata, cover search and custom
//! tag creation.

pub mod controller;
pub mod page;
