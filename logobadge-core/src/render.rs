//! Badge rendering.

use crate::models::{
    BADGE_CLASS, LogoBadge, LogoImage, ProviderLogoProps, StylePreset, WRAPPER_CLASS,
};
use crate::table::LogoTable;

/// Asset base used when the caller doesn't supply one.
pub const DEFAULT_ASSET_BASE: &str = "icons";

/// Renders a badge with images under [`DEFAULT_ASSET_BASE`].
pub fn render(props: &ProviderLogoProps) -> LogoBadge {
    render_with_base(props, DEFAULT_ASSET_BASE)
}

/// Renders a badge with images under `asset_base`.
///
/// Never fails: names without a table entry get the default logo.
pub fn render_with_base(props: &ProviderLogoProps, asset_base: &str) -> LogoBadge {
    let logo_key = props.provider_name.to_lowercase();
    let logo = LogoTable::resolve(&logo_key);
    let preset = StylePreset::for_key(&logo_key);

    LogoBadge {
        wrapper_class: WRAPPER_CLASS,
        badge_class: BADGE_CLASS,
        image: LogoImage {
            key: logo.key,
            src: logo.src(asset_base),
            alt: format!("{} logo", props.provider_name),
            class: preset.size_class,
            style: preset.inline_style(),
        },
    }
}
