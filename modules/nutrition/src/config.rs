use serde::{Deserialize, Serialize};

/// Generative model settings for the meal planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GenAiConfig {
    /// Without a key every generation request fails with 502.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".to_owned(),
            base_url: "https://generativelanguage.googleapis.com".to_owned(),
            timeout_secs: 60,
        }
    }
}
