//! Render input and output types.

use serde::{Deserialize, Serialize};

use super::provider::LogoKey;

/// Class of the outer wrapper: centers the badge horizontally.
pub const WRAPPER_CLASS: &str = "flex justify-center mb-2";

/// Class of the inner badge: fixed square, circular, dark, clipped.
pub const BADGE_CLASS: &str =
    "w-12 h-12 bg-black rounded-full overflow-hidden flex items-center justify-center";

// ============================================================================
// Props
// ============================================================================

/// Input to a badge render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLogoProps {
    /// Provider name as the caller has it. Matched case-insensitively.
    pub provider_name: String,
}

impl ProviderLogoProps {
    /// Creates props for a provider name.
    pub fn new(provider_name: impl Into<String>) -> Self {
        Self {
            provider_name: provider_name.into(),
        }
    }
}

// ============================================================================
// Render Tree
// ============================================================================

/// A rendered badge: wrapper, circular badge, and the logo image inside.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoBadge {
    /// Outer wrapper class.
    pub wrapper_class: &'static str,
    /// Inner badge class.
    pub badge_class: &'static str,
    /// The logo image.
    pub image: LogoImage,
}

/// The `<img>` element of a badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoImage {
    /// Table key the image was resolved from.
    pub key: LogoKey,
    /// Image source.
    pub src: String,
    /// Descriptive text, `"<provider name> logo"`.
    pub alt: String,
    /// Image size class.
    pub class: &'static str,
    /// Inline style, absent for the standard preset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl LogoBadge {
    /// Returns true if the badge shows the default logo.
    pub fn is_fallback(&self) -> bool {
        self.image.key == LogoKey::Default
    }
}
