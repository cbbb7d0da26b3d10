use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::UiConfig;

/// Error type for roster.toml loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse roster.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Load UI configuration from `roster.toml` in the given directory.
/// A missing file yields defaults; a malformed file is an error.
pub fn load_config(dir: &Path) -> Result<UiConfig, ConfigError> {
    let path = dir.join("roster.toml");
    if !path.exists() {
        return Ok(UiConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: UiConfig = toml::from_str(&text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.empty_caption, "No one selected");
        assert!(config.show_key_hints);
    }

    #[test]
    fn test_file_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("roster.toml"),
            "empty_caption = \"nobody\"\nshow_key_hints = false\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.empty_caption, "nobody");
        assert!(!config.show_key_hints);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("roster.toml"), "not = [toml").unwrap();
        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
