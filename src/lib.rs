//! TCH GUI Client Library
//!
//! This crate provides the main application logic for the TCH (TeddyCloud
//! Custom Tag Helper) GUI client, a native admin tool for managing TAF audio
//! archives and custom tonie entries on a TeddyCloud-style backend.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
