//! Configuration system
//!
//! Any `Serialize + Deserialize + Default` type can be stored as TOML or
//! RON. The format is picked from the file extension.

use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match Format::of(path)? {
            Format::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match Format::of(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum Format {
    Toml,
    Ron,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Format::Toml),
            Some("ron") => Ok(Format::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Probe {
        name: String,
        normal: [f32; 3],
        offset: f32,
    }

    impl Default for Probe {
        fn default() -> Self {
            Self {
                name: "probe".to_string(),
                normal: [2.0, 10.0, 2.0],
                offset: 4.0,
            }
        }
    }

    impl Config for Probe {}

    fn temp_path(file: &str) -> PathBuf {
        std::env::temp_dir().join(format!("geom_core_{}_{}", std::process::id(), file))
    }

    #[test]
    fn test_toml_round_trip() {
        let path = temp_path("probe.toml");
        let probe = Probe {
            offset: -1.5,
            ..Default::default()
        };

        probe.save_to_file(&path).unwrap();
        let loaded = Probe::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, probe);
    }

    #[test]
    fn test_ron_round_trip() {
        let path = temp_path("probe.ron");
        let probe = Probe::default();

        probe.save_to_file(&path).unwrap();
        let loaded = Probe::load_from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, probe);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Probe::default().save_to_file(temp_path("probe.json")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Probe::load_from_file(temp_path("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let path = temp_path("broken.toml");
        std::fs::write(&path, "normal = [1.0, 2.0").unwrap();
        let err = Probe::load_from_file(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
