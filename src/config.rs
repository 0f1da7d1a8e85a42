use std::collections::HashSet;
use std::path::Path;

use crate::constants::{
    CATS_PER_COLOR, COLS, DEFAULT_PALETTE, GENERATION_RETRY_CAP, RESERVED_COLUMNS, ROWS,
};
use crate::error::ConfigError;
use crate::game::CatColor;

/// Board layout and generation parameters, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub palette: Vec<CatColor>,
    pub cats_per_color: usize,
    pub generation_retry_cap: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: ROWS,
            cols: COLS,
            palette: DEFAULT_PALETTE.to_vec(),
            cats_per_color: CATS_PER_COLOR,
            generation_retry_cap: GENERATION_RETRY_CAP,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads `path` when one is named, failing if it is missing; defaults
    /// otherwise.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Number of columns that receive cats when a board is dealt.
    pub fn dealt_columns(&self) -> usize {
        self.cols.saturating_sub(RESERVED_COLUMNS)
    }

    pub fn supply_size(&self) -> usize {
        self.palette.len() * self.cats_per_color
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be > 0".into()));
        }
        if self.cols <= RESERVED_COLUMNS {
            return Err(ConfigError::Validation(format!(
                "cols must be > {RESERVED_COLUMNS}"
            )));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::Validation("palette must not be empty".into()));
        }
        let distinct: HashSet<_> = self.palette.iter().collect();
        if distinct.len() != self.palette.len() {
            return Err(ConfigError::Validation(
                "palette must not repeat a color".into(),
            ));
        }
        if self.cats_per_color != self.rows {
            return Err(ConfigError::Validation(
                "cats_per_color must equal rows".into(),
            ));
        }
        if self.supply_size() != self.dealt_columns() * self.rows {
            return Err(ConfigError::Validation(format!(
                "palette of {} colors does not fill {} dealt columns",
                self.palette.len(),
                self.dealt_columns()
            )));
        }
        if self.generation_retry_cap == 0 {
            return Err(ConfigError::Validation(
                "generation_retry_cap must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.supply_size(), 20);
        assert_eq!(config.dealt_columns(), 4);
    }

    #[test]
    fn test_rejects_mismatched_supply() {
        let config = GameConfig {
            cols: 7,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_palette() {
        let config = GameConfig {
            palette: vec![
                CatColor::White,
                CatColor::White,
                CatColor::Brown,
                CatColor::Gray,
            ],
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: palette must not repeat a color"
        );
    }

    #[test]
    fn test_rejects_degenerate_shapes() {
        let narrow = GameConfig {
            cols: 2,
            ..GameConfig::default()
        };
        assert!(narrow.validate().is_err());

        let flat = GameConfig {
            rows: 0,
            ..GameConfig::default()
        };
        assert!(flat.validate().is_err());

        let no_retries = GameConfig {
            generation_retry_cap: 0,
            ..GameConfig::default()
        };
        assert!(no_retries.validate().is_err());
    }

    #[test]
    fn test_load_partial_toml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 4").unwrap();
        writeln!(file, "cols = 5").unwrap();
        writeln!(file, "cats_per_color = 4").unwrap();
        writeln!(file, "palette = [\"ginger\", \"calico\", \"black\"]").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(
            config.palette,
            vec![CatColor::Ginger, CatColor::Calico, CatColor::Black]
        );
        assert_eq!(config.generation_retry_cap, GENERATION_RETRY_CAP);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 3").unwrap();

        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_unknown_color() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "palette = [\"purple\"]").unwrap();

        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_named_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("catstak.toml");

        assert!(matches!(
            GameConfig::resolve(Some(missing.as_path())),
            Err(ConfigError::FileRead { .. })
        ));
        assert_eq!(GameConfig::resolve(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
