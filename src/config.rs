//! Extraction settings
//!
//! Settings come from built-in defaults, optionally overridden by a TOML
//! file with top-level keys:
//!
//! ```toml
//! output_dir = "public/images/profile/"
//! avatar_size = 200
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};

use crate::errors::{AvatarError, AvatarResult};

/// Directory avatars are written to when the caller does not choose one
pub const DEFAULT_OUTPUT_DIR: &str = "public/images/profile/";

/// Edge length in pixels of every written avatar
pub const DEFAULT_AVATAR_SIZE: u32 = 200;

const KNOWN_KEYS: [&str; 2] = ["output_dir", "avatar_size"];

/// Settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Directory receiving `avatar_1.png` .. `avatar_9.png`
    pub output_dir: PathBuf,
    /// Width and height of each avatar
    pub avatar_size: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            avatar_size: DEFAULT_AVATAR_SIZE,
        }
    }
}

impl ExtractionConfig {
    /// Replace the output directory
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Parse settings from a TOML string
    ///
    /// Missing keys keep their defaults. Unknown keys are ignored with a
    /// warning.
    pub fn from_toml_str(content: &str) -> AvatarResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| AvatarError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let table = toml_value
            .as_table()
            .ok_or_else(|| AvatarError::ConfigError("Expected a TOML table".to_string()))?;

        let mut config = ExtractionConfig::default();

        for key in table.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            warn!("Ignoring unknown configuration key: {}", key);
        }

        if let Some(value) = table.get("output_dir") {
            let dir = value.as_str().ok_or_else(|| {
                AvatarError::ConfigError(format!("output_dir must be a string, got {}", value.type_str()))
            })?;
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(value) = table.get("avatar_size") {
            let size = value.as_integer().ok_or_else(|| {
                AvatarError::ConfigError(format!("avatar_size must be an integer, got {}", value.type_str()))
            })?;
            config.avatar_size = u32::try_from(size)
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    AvatarError::ConfigError(format!("avatar_size must be a positive integer, got {}", size))
                })?;
        }

        debug!("Parsed configuration: {:?}", config);
        Ok(config)
    }

    /// Load settings from a TOML file
    pub fn from_toml_file(path: &Path) -> AvatarResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| AvatarError::IoError(path.to_path_buf(), e))?;

        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractionConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("public/images/profile/"));
        assert_eq!(config.avatar_size, 200);
    }

    #[test]
    fn test_empty_document_keeps_defaults() {
        let config = ExtractionConfig::from_toml_str("").unwrap();
        assert_eq!(config, ExtractionConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ExtractionConfig::from_toml_str(
            "output_dir = \"assets/avatars\"\navatar_size = 128\n",
        )
        .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("assets/avatars"));
        assert_eq!(config.avatar_size, 128);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = ExtractionConfig::from_toml_str("grid = 4\n").unwrap();
        assert_eq!(config, ExtractionConfig::default());
    }

    #[test]
    fn test_rejects_non_positive_size() {
        for doc in ["avatar_size = 0", "avatar_size = -5"] {
            let err = ExtractionConfig::from_toml_str(doc).unwrap_err();
            assert!(matches!(err, AvatarError::ConfigError(_)), "{}", doc);
        }
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(ExtractionConfig::from_toml_str("avatar_size = \"big\"").is_err());
        assert!(ExtractionConfig::from_toml_str("output_dir = 3").is_err());
        assert!(ExtractionConfig::from_toml_str("output_dir = ").is_err());
    }

    #[test]
    fn test_with_output_dir() {
        let config = ExtractionConfig::default().with_output_dir("out");
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.avatar_size, DEFAULT_AVATAR_SIZE);
    }

    #[test]
    fn test_missing_file() {
        let err = ExtractionConfig::from_toml_file(Path::new("does/not/exist.toml")).unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }
}
