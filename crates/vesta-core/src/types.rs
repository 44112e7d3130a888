//! # Shared Domain Types
//!
//! Plain data types used across menus, orders, and reservations. These are
//! wire DTOs: field names serialize in camelCase and every field maps 1:1 to
//! the platform's JSON shapes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Localized Strings
// =============================================================================

/// A string localized by locale tag, e.g. `{"en_US": "Small", "es_MX": "Chico"}`.
///
/// BTreeMap keeps serialization order deterministic.
pub type LocalizedString = BTreeMap<String, String>;

/// Picks the text for `locale`, falling back to `fallback`, then to any empty
/// string. Display-side convenience; nothing in pricing depends on titles.
pub fn localize<'a>(text: &'a LocalizedString, locale: &str, fallback: &str) -> &'a str {
    text.get(locale)
        .or_else(|| text.get(fallback))
        .map(String::as_str)
        .unwrap_or("")
}

// =============================================================================
// Contact
// =============================================================================

/// Customer contact details attached to orders and reservations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Phone number in E.164 format (e.g. "+12024561111").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// =============================================================================
// Geo
// =============================================================================

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A postal address. `formatted` is the single-line human-readable form the
/// platform echoes back in search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub apt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat_lng: Option<LatLng>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localize_prefers_requested_locale() {
        let mut text = LocalizedString::new();
        text.insert("en_US".to_string(), "Small".to_string());
        text.insert("es_MX".to_string(), "Chico".to_string());

        assert_eq!(localize(&text, "es_MX", "en_US"), "Chico");
        assert_eq!(localize(&text, "fr_FR", "en_US"), "Small");
        assert_eq!(localize(&text, "fr_FR", "de_DE"), "");
    }

    #[test]
    fn test_contact_skips_absent_fields() {
        let contact = Contact {
            first_name: Some("John".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(json, r#"{"firstName":"John"}"#);
    }
}
