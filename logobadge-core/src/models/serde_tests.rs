//! JSON shape tests for the model types.
//!
//! The CLI prints these types directly, so their serialized field names are
//! part of the output format.

use super::*;
use crate::render;
use serde_json::json;

// ============================================================================
// LogoKey
// ============================================================================

#[test]
fn test_logo_key_serializes_lowercase() {
    assert_eq!(serde_json::to_value(LogoKey::OpenAI).unwrap(), json!("openai"));
    assert_eq!(serde_json::to_value(LogoKey::OpenRouter).unwrap(), json!("openrouter"));
    assert_eq!(serde_json::to_value(LogoKey::Xai).unwrap(), json!("xai"));
}

#[test]
fn test_logo_key_deserializes_table_key() {
    for key in LogoKey::all() {
        let parsed: LogoKey = serde_json::from_value(json!(key.key())).unwrap();
        assert_eq!(parsed, *key);
    }
}

// ============================================================================
// Props
// ============================================================================

#[test]
fn test_props_camel_case() {
    let props: ProviderLogoProps =
        serde_json::from_str(r#"{"providerName":"OpenRouter"}"#).unwrap();
    assert_eq!(props.provider_name, "OpenRouter");
}

#[test]
fn test_props_requires_provider_name() {
    let result: Result<ProviderLogoProps, _> = serde_json::from_str("{}");
    assert!(result.is_err());
}

// ============================================================================
// Badge
// ============================================================================

#[test]
fn test_standard_badge_omits_style() {
    let badge = render(&ProviderLogoProps::new("Google"));
    let value = serde_json::to_value(&badge).unwrap();

    assert_eq!(value["wrapperClass"], json!(WRAPPER_CLASS));
    assert_eq!(value["badgeClass"], json!(BADGE_CLASS));
    assert_eq!(value["image"]["key"], json!("google"));
    assert_eq!(value["image"]["alt"], json!("Google logo"));
    assert_eq!(value["image"]["class"], json!(LARGE_IMAGE_CLASS));
    assert!(value["image"].get("style").is_none());
}

#[test]
fn test_inverted_badge_has_style() {
    let badge = render(&ProviderLogoProps::new("xai"));
    let value = serde_json::to_value(&badge).unwrap();

    assert_eq!(value["image"]["class"], json!(SMALL_IMAGE_CLASS));
    assert_eq!(value["image"]["style"], json!("filter: invert(1); opacity: 0.9"));
}

#[test]
fn test_style_preset_shape() {
    let value = serde_json::to_value(StylePreset::STANDARD).unwrap();
    assert_eq!(value, json!({ "name": "standard", "sizeClass": LARGE_IMAGE_CLASS }));

    let value = serde_json::to_value(StylePreset::INVERTED).unwrap();
    assert_eq!(value["filter"], json!("invert(1)"));
    assert!(value["opacity"].is_number());
}

#[test]
fn test_asset_shape() {
    let value = serde_json::to_value(LogoKey::Databricks.asset()).unwrap();
    assert_eq!(value, json!({ "key": "databricks", "fileName": "databricks@3x.png" }));
}
