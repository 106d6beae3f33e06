//! Logo table keys and asset handles.
//!
//! - [`LogoKey`] - Every key the logo table knows about
//! - [`LogoAsset`] - Opaque handle to one bundled logo image

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ============================================================================
// Logo Key
// ============================================================================

/// Keys of the logo table.
///
/// Serialized as the lowercase table key (`"openai"`, `"xai"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoKey {
    /// OpenAI
    OpenAI,
    /// Anthropic
    Anthropic,
    /// Google
    Google,
    /// Groq
    Groq,
    /// Ollama
    Ollama,
    /// Databricks
    Databricks,
    /// OpenRouter
    OpenRouter,
    /// Snowflake
    Snowflake,
    /// xAI
    Xai,
    /// Fallback logo for any name without an entry.
    Default,
}

impl LogoKey {
    /// Returns all keys, named providers first and `Default` last.
    pub fn all() -> &'static [LogoKey] {
        &[
            Self::OpenAI,
            Self::Anthropic,
            Self::Google,
            Self::Groq,
            Self::Ollama,
            Self::Databricks,
            Self::OpenRouter,
            Self::Snowflake,
            Self::Xai,
            Self::Default,
        ]
    }

    /// Returns the lowercase table key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Groq => "groq",
            Self::Ollama => "ollama",
            Self::Databricks => "databricks",
            Self::OpenRouter => "openrouter",
            Self::Snowflake => "snowflake",
            Self::Xai => "xai",
            Self::Default => "default",
        }
    }

    /// Returns the display name for this key.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAI => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::Google => "Google",
            Self::Groq => "Groq",
            Self::Ollama => "Ollama",
            Self::Databricks => "Databricks",
            Self::OpenRouter => "OpenRouter",
            Self::Snowflake => "Snowflake",
            Self::Xai => "xAI",
            Self::Default => "Default",
        }
    }

    /// Returns the bundled image file name for this key.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::OpenAI => "openai@3x.png",
            Self::Anthropic => "anthropic@3x.png",
            Self::Google => "google@3x.png",
            Self::Groq => "groq@3x.png",
            Self::Ollama => "ollama@3x.png",
            Self::Databricks => "databricks@3x.png",
            Self::OpenRouter => "openrouter@3x.png",
            Self::Snowflake => "snowflake@3x.png",
            Self::Xai => "xai@3x.png",
            Self::Default => "default@3x.png",
        }
    }

    /// Returns the asset handle bound to this key.
    pub const fn asset(self) -> LogoAsset {
        LogoAsset::new(self)
    }
}

impl fmt::Display for LogoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Strict, case-insensitive parse. Unlike rendering, unknown names are an
/// error here rather than the `Default` key.
impl FromStr for LogoKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|k| k.key() == normalized)
            .ok_or_else(|| CoreError::UnknownProvider(s.to_string()))
    }
}

// ============================================================================
// Logo Asset
// ============================================================================

/// Handle to a bundled logo image.
///
/// The image bytes are never touched here; the handle only knows which file
/// it names and resolves that into an image `src` under an asset base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoAsset {
    /// Table key this asset is bound to.
    pub key: LogoKey,
    /// Image file name, relative to the asset base.
    pub file_name: &'static str,
}

impl LogoAsset {
    /// Creates the asset handle for a key.
    pub const fn new(key: LogoKey) -> Self {
        Self {
            key,
            file_name: key.file_name(),
        }
    }

    /// Returns true if the handle names no file.
    pub fn is_empty(&self) -> bool {
        self.file_name.is_empty()
    }

    /// Resolves the image `src` under `base`.
    ///
    /// An empty base yields the bare file name; trailing slashes on the base
    /// are ignored.
    pub fn src(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        if base.is_empty() {
            self.file_name.to_string()
        } else {
            format!("{}/{}", base, self.file_name)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_key_table_key() {
        assert_eq!(LogoKey::OpenAI.key(), "openai");
        assert_eq!(LogoKey::OpenRouter.key(), "openrouter");
        assert_eq!(LogoKey::Default.key(), "default");
    }

    #[test]
    fn test_logo_key_display_name() {
        assert_eq!(LogoKey::Xai.display_name(), "xAI");
        assert_eq!(LogoKey::OpenAI.display_name(), "OpenAI");
    }

    #[test]
    fn test_all_has_default_last() {
        let all = LogoKey::all();
        assert_eq!(all.len(), 10);
        assert_eq!(all.last(), Some(&LogoKey::Default));
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("XAI".parse::<LogoKey>().unwrap(), LogoKey::Xai);
        assert_eq!("OpenAI".parse::<LogoKey>().unwrap(), LogoKey::OpenAI);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "made-up-provider".parse::<LogoKey>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownProvider(name) if name == "made-up-provider"));
    }

    #[test]
    fn test_asset_file_name_matches_key() {
        for key in LogoKey::all() {
            assert_eq!(key.asset().file_name, key.file_name());
            assert_eq!(key.asset().key, *key);
        }
    }

    #[test]
    fn test_asset_src() {
        let asset = LogoKey::Groq.asset();
        assert_eq!(asset.src("icons"), "icons/groq@3x.png");
        assert_eq!(asset.src("/static/icons/"), "/static/icons/groq@3x.png");
        assert_eq!(asset.src(""), "groq@3x.png");
    }
}
