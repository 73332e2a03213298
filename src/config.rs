use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted tool preferences, stored as `config.toml` inside the SDK root
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred Qt installation, used when `env` gets no positional path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qt_path: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            toml::to_string_pretty(self).context("Failed to serialize mpf-dev config file")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {:?}", path))?;
        Ok(())
    }

    /// Pick the Qt path for an invocation
    ///
    /// Precedence: explicit argument, then the persisted preference, then
    /// the platform default. The resolver itself never defaults anything.
    pub fn qt_path(&self, explicit: Option<&str>) -> PathBuf {
        if let Some(path) = explicit {
            return PathBuf::from(shellexpand::tilde(path).into_owned());
        }

        if let Some(path) = &self.qt_path {
            return path.clone();
        }

        default_qt_path()
    }
}

/// Fixed platform default for a stock Qt installation
fn default_qt_path() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Qt\6.8.3\mingw_64")
    } else {
        directories::BaseDirs::new()
            .map(|base| base.home_dir().join("Qt/6.8.3/gcc_64"))
            .unwrap_or_else(|| PathBuf::from("/opt/Qt/6.8.3/gcc_64"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(&temp.path().join("config.toml")).unwrap();
        assert!(config.qt_path.is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sdk/config.toml");

        let config = Config {
            qt_path: Some(PathBuf::from("/opt/qt/6.8.3")),
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.qt_path.as_deref(), Some(Path::new("/opt/qt/6.8.3")));
    }

    #[test]
    fn test_explicit_qt_path_wins() {
        let config = Config {
            qt_path: Some(PathBuf::from("/persisted/qt")),
        };
        assert_eq!(
            config.qt_path(Some("/explicit/qt")),
            Path::new("/explicit/qt")
        );
    }

    #[test]
    fn test_persisted_qt_path_beats_default() {
        let config = Config {
            qt_path: Some(PathBuf::from("/persisted/qt")),
        };
        assert_eq!(config.qt_path(None), Path::new("/persisted/qt"));
    }

    #[test]
    fn test_default_qt_path_when_unset() {
        let config = Config::default();
        let path = config.qt_path(None);
        assert!(path.to_string_lossy().contains("6.8.3"));
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "qt_path = [").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
