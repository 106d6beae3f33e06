//! The logo table.
//!
//! Maps lowercase provider keys to logo assets. Built once on first access
//! and shared read-only for the life of the process.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::models::{LogoAsset, LogoKey};

// ============================================================================
// Static Table
// ============================================================================

/// Static storage for the key to asset mapping.
static TABLE: OnceLock<HashMap<&'static str, LogoAsset>> = OnceLock::new();

fn build_table() -> HashMap<&'static str, LogoAsset> {
    LogoKey::all()
        .iter()
        .map(|key| (key.key(), key.asset()))
        .collect()
}

/// Falls back to the default asset when a lookup missed or hit an entry
/// that names no file.
fn or_default(asset: Option<LogoAsset>) -> LogoAsset {
    asset
        .filter(|a| !a.is_empty())
        .unwrap_or_else(LogoTable::default_asset)
}

// ============================================================================
// Logo Table
// ============================================================================

/// Global logo table.
pub struct LogoTable;

impl LogoTable {
    fn map() -> &'static HashMap<&'static str, LogoAsset> {
        TABLE.get_or_init(build_table)
    }

    /// Looks up a provider name, case-insensitively. No fallback.
    pub fn get(name: &str) -> Option<LogoAsset> {
        Self::map().get(name.to_lowercase().as_str()).copied()
    }

    /// Resolves a provider name to its asset, or the default asset.
    pub fn resolve(name: &str) -> LogoAsset {
        or_default(Self::get(name))
    }

    /// Returns the asset used for names without an entry.
    pub fn default_asset() -> LogoAsset {
        LogoKey::Default.asset()
    }

    /// Returns true if the table has an entry for `name`.
    pub fn contains(name: &str) -> bool {
        Self::get(name).is_some()
    }

    /// Returns every entry, named providers first and `default` last.
    pub fn entries() -> Vec<LogoAsset> {
        LogoKey::all()
            .iter()
            .filter_map(|key| Self::map().get(key.key()).copied())
            .collect()
    }

    /// Returns the number of entries, `default` included.
    pub fn count() -> usize {
        Self::map().len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_all_keys() {
        assert_eq!(LogoTable::count(), 10);
        for key in [
            "openai",
            "anthropic",
            "google",
            "groq",
            "ollama",
            "databricks",
            "openrouter",
            "snowflake",
            "xai",
            "default",
        ] {
            assert!(LogoTable::contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_get_is_case_insensitive() {
        assert_eq!(LogoTable::get("OpenAI"), LogoTable::get("openai"));
        assert_eq!(LogoTable::get("SNOWFLAKE").map(|a| a.key), Some(LogoKey::Snowflake));
    }

    #[test]
    fn test_get_unknown() {
        assert_eq!(LogoTable::get("made-up-provider"), None);
        assert_eq!(LogoTable::get(""), None);
    }

    #[test]
    fn test_resolve_falls_back() {
        assert_eq!(LogoTable::resolve("made-up-provider"), LogoTable::default_asset());
        assert_eq!(LogoTable::resolve(""), LogoTable::default_asset());
        assert_eq!(LogoTable::resolve("groq").key, LogoKey::Groq);
    }

    #[test]
    fn test_empty_entry_falls_back() {
        let empty = LogoAsset {
            key: LogoKey::Groq,
            file_name: "",
        };
        assert_eq!(or_default(Some(empty)), LogoTable::default_asset());
        assert_eq!(or_default(None), LogoTable::default_asset());
    }

    #[test]
    fn test_entries_order() {
        let entries = LogoTable::entries();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].key, LogoKey::OpenAI);
        assert_eq!(entries[9].key, LogoKey::Default);
    }

    #[test]
    fn test_table_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| LogoTable::resolve("Anthropic")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().key, LogoKey::Anthropic);
        }
    }
}
