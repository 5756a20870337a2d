//! Batch Feature
//!
//! Four-step wizard that links many orphaned TAF files in one run:
//! Analyze -> Review -> Confirm -> Process.

pub mod controller;
pub mod wizard;
