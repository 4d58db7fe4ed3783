use super::constants::*;
use super::types::{LlmSettings, ModelSettings};

pub fn default_user_agent() -> String {
    format!("itinera/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            generator: DEFAULT_GENERATOR_MODEL.to_string(),
        }
    }
}
