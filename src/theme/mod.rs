//! Theme module

pub mod colors;
