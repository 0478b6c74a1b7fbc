use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_PRECISION: usize = 2;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// data_file = "/home/me/weather.csv"
/// precision = 2
/// default_threshold = 25.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Weather data file used when no path is given on the command line.
    pub data_file: Option<PathBuf>,

    /// Decimal places shown for averages.
    pub precision: usize,

    pub default_threshold: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self { data_file: None, precision: DEFAULT_PRECISION, default_threshold: None }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherstats", "weatherstats")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the data file to use: an explicit path wins over the configured one.
    pub fn resolve_data_file(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit.or_else(|| self.data_file.clone()).ok_or_else(|| {
            anyhow!(
                "No weather data file given.\n\
                 Hint: pass a CSV path or run `weatherstats configure` to set a default file."
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = Config::load_from(&dir.path().join("config.toml")).expect("load");

        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            data_file: Some(PathBuf::from("/data/weather.csv")),
            precision: 1,
            default_threshold: Some(25.0),
        };
        cfg.save_to(&path).expect("save");

        assert_eq!(Config::load_from(&path).expect("load"), cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_threshold = 30.0\n").expect("write");

        let cfg = Config::load_from(&path).expect("load");
        assert_eq!(cfg.precision, DEFAULT_PRECISION);
        assert_eq!(cfg.default_threshold, Some(30.0));
        assert_eq!(cfg.data_file, None);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "precision = \"lots\"\n").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn explicit_data_file_wins() {
        let cfg = Config { data_file: Some(PathBuf::from("a.csv")), ..Config::default() };

        assert_eq!(
            cfg.resolve_data_file(Some(PathBuf::from("b.csv"))).expect("resolve"),
            PathBuf::from("b.csv")
        );
        assert_eq!(cfg.resolve_data_file(None).expect("resolve"), PathBuf::from("a.csv"));
    }

    #[test]
    fn missing_data_file_errors_with_hint() {
        let err = Config::default().resolve_data_file(None).unwrap_err();
        assert!(err.to_string().contains("Hint: pass a CSV path"));
    }
}
