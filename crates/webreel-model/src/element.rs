//! Element fingerprint shared by interaction and snapshot records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Longest text content carried by a descriptor.
pub const MAX_TEXT_LEN: usize = 100;

/// Ancestor levels included in the short CSS-style selector.
pub const SELECTOR_MAX_DEPTH: usize = 5;

/// Classes per level included in the short CSS-style selector.
pub const SELECTOR_MAX_CLASSES: usize = 2;

/// Attributes a descriptor is allowed to carry. Everything else is
/// dropped at capture time so arbitrary page data never lands in a log.
pub const ALLOWED_ATTRIBUTES: &[&str] = &[
    "href",
    "src",
    "alt",
    "title",
    "name",
    "type",
    "value",
    "placeholder",
    "role",
    "aria-label",
];

/// Identifying fingerprint of a DOM element at capture time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    pub tag_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    /// Absolute XPath-style path from the document root.
    pub xpath: String,
    /// Bounded-depth CSS-selector-style path (see `SELECTOR_MAX_DEPTH`).
    pub selector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    pub bounding_box: BoundingBox,
    /// Computed-style visibility: not display:none, not
    /// visibility:hidden, opacity above zero.
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Viewport geometry captured alongside a snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub device_pixel_ratio: f64,
}

/// Truncate text content to the descriptor limit, on a char boundary.
pub fn truncate_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_TEXT_LEN).collect())
}

/// Drop every attribute outside the allow-list.
pub fn filter_attributes(attributes: &mut BTreeMap<String, String>) {
    attributes.retain(|key, _| ALLOWED_ATTRIBUTES.contains(&key.as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_limits_chars() {
        let long = "x".repeat(500);
        let text = truncate_text(&long).unwrap();
        assert_eq!(text.chars().count(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_truncate_text_empty_is_none() {
        assert_eq!(truncate_text("   "), None);
    }

    #[test]
    fn test_truncate_text_multibyte_boundary() {
        let long = "é".repeat(200);
        let text = truncate_text(&long).unwrap();
        assert_eq!(text.chars().count(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_filter_attributes_keeps_allow_list_only() {
        let mut attrs = BTreeMap::from([
            ("href".to_string(), "/home".to_string()),
            ("data-tracking-id".to_string(), "secret".to_string()),
            ("role".to_string(), "button".to_string()),
        ]);
        filter_attributes(&mut attrs);

        assert_eq!(attrs.len(), 2);
        assert!(attrs.contains_key("href"));
        assert!(attrs.contains_key("role"));
        assert!(!attrs.contains_key("data-tracking-id"));
    }

    #[test]
    fn test_descriptor_serializes_camel_case() {
        let descriptor = ElementDescriptor {
            tag_name: "button".to_string(),
            id: Some("submit".to_string()),
            classes: vec!["primary".to_string()],
            xpath: "/html/body/button[1]".to_string(),
            selector: "form > button#submit".to_string(),
            text: Some("Send".to_string()),
            attributes: BTreeMap::new(),
            bounding_box: BoundingBox {
                x: 10.0,
                y: 20.0,
                width: 80.0,
                height: 30.0,
            },
            visible: true,
        };

        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(json.contains("\"tagName\":\"button\""));
        assert!(json.contains("\"boundingBox\""));
    }
}
