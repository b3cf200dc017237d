use napi_derive::napi;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// One entry of a profile's link list.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Icon image URL, rendered before the text when present.
    pub icon: Option<String>,
    pub text: String,
    pub url: String,
}

/// The record behind one link-hub page, as served by `/usuarios/{id}`.
#[napi(object)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub photo_url: Option<String>,
    /// Hex color, CSS gradient or image URL. Passed to CSS verbatim.
    pub background: String,
    pub link_color: String,
    pub link_hover_color: String,
    pub link_text_color: String,
    pub icon_color: Option<String>,
    pub border_radius: String,
    /// Rendered in this order.
    #[serde(default)]
    pub links: Vec<LinkEntry>,
}

/// Options passed from JS to the render entry points.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Full URL of the page being rendered; its `?id=` selects the profile.
    pub page_url: String,
    pub api_base_url: Option<String>,
    pub default_profile_id: Option<String>,
    /// QR image size, e.g. "200x200".
    pub qr_size: Option<String>,
}

/// Result of a render, returned from Rust to JS.
#[napi(object)]
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub profile_id: String,
    pub html: String,
    pub stylesheet: String,
    pub qr_code_url: String,
}

/// json-server hands out ids as either strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
