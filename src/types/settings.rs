use serde::{Deserialize, Serialize};

/// Client settings persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientSettings {
    /// Base URL of the bookmark API, without the `/bookmarks` suffix.
    pub api_url: String,
    pub request_timeout_secs: u64,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            request_timeout_secs: 10,
            log_level: "info".to_string(),
        }
    }
}
