// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `LogoBadge` Core
//!
//! Core types and the badge render function for the `LogoBadge` workspace.
//!
//! A badge is a circular, dark, clipped container holding one provider logo.
//! The logo is picked from a static table keyed by the lowercase provider
//! name; unknown names fall back to the `default` logo.
//!
//! ## Key Types
//!
//! ### Table
//! - [`LogoKey`] - Enum of every key in the logo table
//! - [`LogoAsset`] - Opaque handle to a bundled logo image
//! - [`LogoTable`] - Process-wide, read-only lookup table
//!
//! ### Rendering
//! - [`ProviderLogoProps`] - Caller input (the provider name)
//! - [`StylePreset`] - Image size class and optional inline style
//! - [`LogoBadge`] - The rendered two-level container tree
//! - [`render()`] - Pure function from props to [`LogoBadge`]

pub mod error;
pub mod models;
pub mod render;
pub mod table;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Table types
    LogoAsset,
    LogoKey,
    // Style types
    StylePreset,
    LARGE_IMAGE_CLASS,
    SMALL_IMAGE_CLASS,
    // Render tree
    BADGE_CLASS,
    LogoBadge,
    LogoImage,
    ProviderLogoProps,
    WRAPPER_CLASS,
};

pub use render::{DEFAULT_ASSET_BASE, render, render_with_base};
pub use table::LogoTable;
