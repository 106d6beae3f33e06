//! Provider logo component.

use logobadge_core::{DEFAULT_ASSET_BASE, LogoBadge, ProviderLogoProps, render_with_base};
use maud::{Markup, Render, html};

/// Circular badge showing a provider's logo.
#[derive(Debug, Clone)]
pub struct ProviderLogo {
    props: ProviderLogoProps,
    asset_base: String,
}

impl ProviderLogo {
    /// Creates a badge for a provider name, with images under the default
    /// asset base.
    pub fn new(provider_name: impl Into<String>) -> Self {
        Self::from_props(ProviderLogoProps::new(provider_name))
    }

    /// Creates a badge from render props.
    pub fn from_props(props: ProviderLogoProps) -> Self {
        Self {
            props,
            asset_base: DEFAULT_ASSET_BASE.to_string(),
        }
    }

    /// Sets the path or URL prefix the logo images are served under.
    pub fn asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = base.into();
        self
    }

    /// Resolves the badge render tree.
    pub fn badge(&self) -> LogoBadge {
        render_with_base(&self.props, &self.asset_base)
    }
}

impl Render for ProviderLogo {
    fn render(&self) -> Markup {
        badge_markup(&self.badge())
    }
}

/// Renders a badge tree as HTML.
pub fn badge_markup(badge: &LogoBadge) -> Markup {
    let image = &badge.image;

    html! {
        div class=(badge.wrapper_class) {
            div class=(badge.badge_class) {
                img
                    src=(image.src)
                    alt=(image.alt)
                    class=(image.class)
                    style=[image.style.as_deref()];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logobadge_core::LogoKey;

    #[test]
    fn test_default_asset_base() {
        let badge = ProviderLogo::new("Groq").badge();
        assert_eq!(badge.image.src, "icons/groq@3x.png");
        assert_eq!(badge.image.key, LogoKey::Groq);
    }

    #[test]
    fn test_custom_asset_base() {
        let badge = ProviderLogo::new("Groq")
            .asset_base("https://cdn.example.com/logos")
            .badge();
        assert_eq!(badge.image.src, "https://cdn.example.com/logos/groq@3x.png");
    }

    #[test]
    fn test_standard_markup_has_no_style() {
        let html = ProviderLogo::new("openai").render().into_string();
        assert_eq!(
            html,
            concat!(
                r#"<div class="flex justify-center mb-2">"#,
                r#"<div class="w-12 h-12 bg-black rounded-full overflow-hidden flex items-center justify-center">"#,
                r#"<img src="icons/openai@3x.png" alt="openai logo" class="w-16 h-16 object-contain">"#,
                "</div></div>",
            )
        );
    }

    #[test]
    fn test_xai_markup_has_style() {
        let html = ProviderLogo::new("XAI").render().into_string();
        assert!(html.contains(r#"alt="XAI logo""#));
        assert!(html.contains(r#"class="w-8 h-8 object-contain""#));
        assert!(html.contains(r#"style="filter: invert(1); opacity: 0.9""#));
    }
}
