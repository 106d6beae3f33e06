// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! `LogoBadge` UI components.
//!
//! [`ProviderLogo`] wraps the core render function in a builder and turns the
//! resulting [`LogoBadge`](logobadge_core::LogoBadge) into HTML markup.

pub mod components;

pub use components::{ProviderLogo, badge_markup};
