//! Data shapes supplied by the JXA scripts
//!
//! These mirror the JSON the scripting bridge returns. Field names are
//! camelCase on the wire because the values originate in JavaScript.

use serde::{Deserialize, Serialize};

/// A browser tab as reported by the tab-enumeration script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    #[serde(default)]
    pub window_id: i64,
    #[serde(default)]
    pub index: i64,
    pub title: String,
    pub url: String,
    /// Tabs from the local device, as opposed to iCloud tabs.
    #[serde(default)]
    pub is_local: bool,
}

/// A browsing-history entry as reported by the history script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    #[serde(default)]
    pub id: i64,
    /// History rows can lack a title entirely.
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
    /// Timestamp text in whatever form the bridge emitted it.
    pub last_visited: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_deserializes_camel_case() {
        let json = r#"{"windowId": 2, "index": 0, "title": "Example", "url": "https://example.com", "isLocal": true}"#;
        let tab: Tab = serde_json::from_str(json).unwrap();
        assert_eq!(tab.window_id, 2);
        assert!(tab.is_local);
    }

    #[test]
    fn test_tab_missing_optional_fields_default() {
        let json = r#"{"title": "Example", "url": "https://example.com"}"#;
        let tab: Tab = serde_json::from_str(json).unwrap();
        assert_eq!(tab.window_id, 0);
        assert!(!tab.is_local);
    }

    #[test]
    fn test_history_item_null_title() {
        let json = r#"{"id": 7, "title": null, "url": "https://example.com", "lastVisited": "2024-01-05 14:30:00"}"#;
        let item: HistoryItem = serde_json::from_str(json).unwrap();
        assert!(item.title.is_none());
        assert_eq!(item.last_visited, "2024-01-05 14:30:00");
    }
}
