//! Domain models for `LogoBadge`.
//!
//! ## Submodules
//!
//! - [`provider`] - Table keys and asset handles (`LogoKey`, `LogoAsset`)
//! - [`style`] - Image style presets (`StylePreset`)
//! - [`badge`] - Render input and output (`ProviderLogoProps`, `LogoBadge`)

mod badge;
mod provider;
mod style;

pub use badge::{BADGE_CLASS, LogoBadge, LogoImage, ProviderLogoProps, WRAPPER_CLASS};
pub use provider::{LogoAsset, LogoKey};
pub use style::{LARGE_IMAGE_CLASS, SMALL_IMAGE_CLASS, StylePreset};
#[cfg(test)]
mod serde_tests;
