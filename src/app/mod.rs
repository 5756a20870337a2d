//! Application Layer
//!
//! Contains app initialization, window management, global entities, and workspace.

pub mod application;
pub mod entities;
pub mod navigation;
pub mod workspace;
