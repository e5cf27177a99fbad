/// Data structures for Tab Decimator
use serde::{Deserialize, Serialize};

/// Snapshot of a browser tab as reported by `chrome.tabs.query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: i32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub active: bool,
}

impl TabInfo {
    pub fn new(id: i32, url: String, title: String, active: bool) -> TabInfo {
        TabInfo {
            id,
            url,
            title,
            active,
        }
    }
}

/// Argument passed to `chrome.tabs.create` when a tab is restored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProperties {
    pub url: String,
    pub active: bool,
}
