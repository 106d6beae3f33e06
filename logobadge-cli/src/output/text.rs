//! Text output formatting.

use logobadge_core::{LogoAsset, LogoBadge, StylePreset};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a rendered badge as a short block.
    pub fn format_badge(&self, badge: &LogoBadge) -> String {
        let image = &badge.image;
        let mut key = image.key.key().to_string();
        if badge.is_fallback() {
            key.push_str(&self.dim(" (fallback)"));
        }
        let style = match &image.style {
            Some(style) => self.yellow(style),
            None => self.dim("none"),
        };

        [
            self.bold(&image.alt),
            format!("  key:   {key}"),
            format!("  src:   {}", self.cyan(&image.src)),
            format!("  class: {}", image.class),
            format!("  style: {style}"),
        ]
        .join("\n")
    }

    /// Header line for the logo table listing.
    pub fn format_providers_header(&self) -> String {
        self.bold(&format!(
            "{:<12} {:<12} {:<22} {}",
            "KEY", "NAME", "ASSET", "PRESET"
        ))
    }

    /// One row of the logo table listing.
    pub fn format_provider_line(&self, asset: &LogoAsset) -> String {
        let preset = StylePreset::for_key(asset.key.key());
        let preset_name = if preset.is_inverted() {
            self.yellow(preset.name)
        } else {
            preset.name.to_string()
        };

        format!(
            "{:<12} {:<12} {:<22} {}",
            asset.key.key(),
            asset.key.display_name(),
            asset.file_name,
            preset_name
        )
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_colors {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    fn bold(&self, s: &str) -> String {
        self.paint(BOLD, s)
    }

    fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }

    fn yellow(&self, s: &str) -> String {
        self.paint(YELLOW, s)
    }

    fn cyan(&self, s: &str) -> String {
        self.paint(CYAN, s)
    }
}
