use std::path::{Path, PathBuf};

use log::warn;

use crate::error::ConfigError;
use crate::game::DEFAULT_MAX_LINE_LEN;

/// Settings for the interactive game loop.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// File the board is written to after every move.
    pub output_path: PathBuf,
    /// Print the board to stdout after every move.
    pub show_board: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            output_path: PathBuf::from("current_board.txt"),
            show_board: true,
        }
    }
}

/// Settings for reading moves.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Longer answers are treated as malformed.
    pub max_line_len: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub input: InputConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.output_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "game.output_path must not be empty".into(),
            ));
        }
        if self.input.max_line_len == 0 {
            return Err(ConfigError::Validation(
                "input.max_line_len must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.input.max_line_len, 48);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
show_board = false
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.game.show_board);
        assert_eq!(config.game.output_path, PathBuf::from("current_board.txt"));
        assert_eq!(config.input.max_line_len, DEFAULT_MAX_LINE_LEN);
    }

    #[test]
    fn test_validation_rejects_zero_line_len() {
        let mut config = AppConfig::default();
        config.input.max_line_len = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_output_path() {
        let mut config = AppConfig::default();
        config.game.output_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert!(config.game.show_board);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
output_path = "out/board.txt"

[input]
max_line_len = 16
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.output_path, PathBuf::from("out/board.txt"));
        assert_eq!(config.input.max_line_len, 16);
        assert!(config.game.show_board);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[input]\nmax_line_len = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
