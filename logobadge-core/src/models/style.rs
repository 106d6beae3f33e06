//! Image style presets.

use serde::Serialize;

use super::provider::LogoKey;

/// Size class for ordinary logos.
pub const LARGE_IMAGE_CLASS: &str = "w-16 h-16 object-contain";

/// Size class for the xAI logo, which needs more room inside the circle.
pub const SMALL_IMAGE_CLASS: &str = "w-8 h-8 object-contain";

/// Visual treatment applied to the logo image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreset {
    /// Preset name, for listings.
    pub name: &'static str,
    /// Image size class.
    pub size_class: &'static str,
    /// CSS filter, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<&'static str>,
    /// Image opacity, if overridden.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl StylePreset {
    /// Large image, no inline style.
    pub const STANDARD: Self = Self {
        name: "standard",
        size_class: LARGE_IMAGE_CLASS,
        filter: None,
        opacity: None,
    };

    /// Small image with inverted colors and slightly reduced opacity.
    pub const INVERTED: Self = Self {
        name: "inverted",
        size_class: SMALL_IMAGE_CLASS,
        filter: Some("invert(1)"),
        opacity: Some(0.9),
    };

    /// Picks the preset for an already lowercased logo key.
    ///
    /// Only `xai` gets the inverted treatment.
    pub fn for_key(logo_key: &str) -> Self {
        if logo_key == LogoKey::Xai.key() {
            Self::INVERTED
        } else {
            Self::STANDARD
        }
    }

    /// Returns true for the inverted preset.
    pub fn is_inverted(&self) -> bool {
        self.filter.is_some()
    }

    /// Builds the inline `style` attribute value, or `None` when the preset
    /// overrides nothing.
    pub fn inline_style(&self) -> Option<String> {
        let mut decls = Vec::new();
        if let Some(filter) = self.filter {
            decls.push(format!("filter: {filter}"));
        }
        if let Some(opacity) = self.opacity {
            decls.push(format!("opacity: {opacity}"));
        }

        if decls.is_empty() {
            None
        } else {
            Some(decls.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_key_xai() {
        assert_eq!(StylePreset::for_key("xai"), StylePreset::INVERTED);
    }

    #[test]
    fn test_for_key_expects_normalized_input() {
        // Callers lowercase first; the check itself is exact.
        assert_eq!(StylePreset::for_key("XAI"), StylePreset::STANDARD);
        assert_eq!(StylePreset::for_key("openai"), StylePreset::STANDARD);
    }

    #[test]
    fn test_inline_style() {
        assert_eq!(StylePreset::STANDARD.inline_style(), None);
        assert_eq!(
            StylePreset::INVERTED.inline_style().as_deref(),
            Some("filter: invert(1); opacity: 0.9")
        );
    }

    #[test]
    fn test_size_classes() {
        assert_eq!(StylePreset::STANDARD.size_class, "w-16 h-16 object-contain");
        assert_eq!(StylePreset::INVERTED.size_class, "w-8 h-8 object-contain");
        assert!(StylePreset::INVERTED.is_inverted());
        assert!(!StylePreset::STANDARD.is_inverted());
    }
}
