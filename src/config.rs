use serde::{Deserialize, Serialize};

/// Environment block injected into every session that reads `settings.json`.
///
/// Field order is the key order of the serialized object.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EnvSettings {
    pub anthropic_auth_token: String,
    pub anthropic_base_url: String,
    /// Milliseconds, kept as a string of digits.
    pub api_timeout_ms: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub env: EnvSettings,
}

impl Settings {
    /// The settings this tool installs (GLM endpoint).
    pub fn canonical() -> Self {
        Self {
            env: EnvSettings {
                anthropic_auth_token: "df9009f7b2444b7f8ffff4c85576ca26.8AB5dWYA9Q5MEDbH"
                    .to_string(),
                anthropic_base_url: "https://api.z.ai/api/anthropic".to_string(),
                api_timeout_ms: "3000000".to_string(),
            },
        }
    }

    /// Pretty JSON with 2-space indentation and no trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = r#"{
  "env": {
    "ANTHROPIC_AUTH_TOKEN": "df9009f7b2444b7f8ffff4c85576ca26.8AB5dWYA9Q5MEDbH",
    "ANTHROPIC_BASE_URL": "https://api.z.ai/api/anthropic",
    "API_TIMEOUT_MS": "3000000"
  }
}"#;

    #[test]
    fn test_canonical_json_layout() {
        let json = Settings::canonical().to_json().unwrap();
        assert_eq!(json, EXPECTED);
    }

    #[test]
    fn test_timeout_is_a_string() {
        let value: serde_json::Value =
            serde_json::from_str(&Settings::canonical().to_json().unwrap()).unwrap();
        assert!(value["env"]["API_TIMEOUT_MS"].is_string());
        assert_eq!(value["env"]["API_TIMEOUT_MS"], "3000000");
    }

    #[test]
    fn test_parse_back_matches() {
        let settings = Settings::canonical();
        let parsed: Settings = serde_json::from_str(&settings.to_json().unwrap()).unwrap();
        assert_eq!(parsed, settings);
    }
}
