//! UI rendering components split from the main renderer

pub mod common;
pub mod inventory;
pub mod status;
