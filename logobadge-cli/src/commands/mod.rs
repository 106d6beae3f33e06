//! CLI command implementations.

pub mod config;
pub mod providers;
pub mod render;
