use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from roster.toml (all optional)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Caption text shown when nothing is selected
    #[serde(default = "default_empty_caption")]
    pub empty_caption: String,
    /// Color overrides, hex strings keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

fn default_empty_caption() -> String {
    "No one selected".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            empty_caption: default_empty_caption(),
            colors: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_toml_gets_defaults() {
        let config: UiConfig = toml::from_str("").unwrap();
        assert!(config.show_key_hints);
        assert_eq!(config.empty_caption, "No one selected");
        assert!(config.colors.is_empty());
    }

    #[test]
    fn test_overrides_parse() {
        let config: UiConfig = toml::from_str(
            r##"
show_key_hints = false
empty_caption = "nobody yet"

[colors]
background = "#000000"
"##,
        )
        .unwrap();
        assert!(!config.show_key_hints);
        assert_eq!(config.empty_caption, "nobody yet");
        assert_eq!(config.colors.get("background").unwrap(), "#000000");
    }
}
