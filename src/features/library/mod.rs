//! Library Feature
//!
//! Paginated TAF listing with link status, selection and the batch entry
//! point.

pub mod controller;
pub mod page;
