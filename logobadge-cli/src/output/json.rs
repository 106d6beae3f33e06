//! JSON output formatting.

use anyhow::Result;
use logobadge_core::{LogoAsset, LogoBadge, StylePreset};
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// One logo table entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderEntryOutput {
    pub key: String,
    pub display_name: String,
    pub file_name: String,
    pub src: String,
    pub preset: StylePreset,
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats rendered badges: an object for one, an array for several.
    pub fn format_badges(&self, badges: &[LogoBadge]) -> Result<String> {
        if let [badge] = badges {
            self.format(badge)
        } else {
            self.format(badges)
        }
    }

    /// Formats the logo table.
    pub fn format_providers(&self, entries: &[LogoAsset], asset_base: &str) -> Result<String> {
        let outputs: Vec<ProviderEntryOutput> = entries
            .iter()
            .map(|asset| ProviderEntryOutput {
                key: asset.key.key().to_string(),
                display_name: asset.key.display_name().to_string(),
                file_name: asset.file_name.to_string(),
                src: asset.src(asset_base),
                preset: StylePreset::for_key(asset.key.key()),
            })
            .collect();

        self.format(&outputs)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pretty() {
        let formatter = JsonFormatter::new(true);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_compact() {
        let formatter = JsonFormatter::new(false);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(!output.contains('\n'));
    }
}
