use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Where the loaded configuration came from.
///
/// Logging is deferred to [`ConfigOrigin::report`] because the config is
/// read before the subscriber exists.
#[derive(Debug)]
pub enum ConfigOrigin {
    /// Parsed from an existing file.
    File(PathBuf),
    /// No file existed; defaults were written to this path.
    CreatedDefault(PathBuf),
    /// The file did not parse; defaults are in use and the file is untouched.
    Malformed {
        path: PathBuf,
        error: toml::de::Error,
    },
}

impl ConfigOrigin {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    /// Logs how the configuration was obtained.
    pub fn report(&self) {
        match self {
            Self::File(path) => info!(path = %path.display(), "Config loaded"),
            Self::CreatedDefault(path) => {
                info!(path = %path.display(), "Config file not found, created default");
            }
            Self::Malformed { path, error } => warn!(
                path = %path.display(),
                error = %error,
                "Failed to parse config file, using defaults"
            ),
        }
    }
}

pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager` rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the application configuration, writing defaults when missing.
    ///
    /// A malformed file is left untouched and defaults are used; the returned
    /// [`ConfigOrigin`] says which case happened.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(
        &self,
        path_override: Option<&Path>,
    ) -> Result<(AppConfig, ConfigOrigin), ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok((default_config, ConfigOrigin::CreatedDefault(config_path)));
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => Ok((config, ConfigOrigin::File(config_path))),
            Err(error) => Ok((
                AppConfig::default(),
                ConfigOrigin::Malformed {
                    path: config_path,
                    error,
                },
            )),
        }
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("jlm-apply");
        let manager = StorageManager::with_dir(config_dir.clone());

        let (config, origin) = manager.load_config(None).unwrap();
        assert_eq!(config.request_timeout_secs, 30);

        let config_file = config_dir.join(CONFIG_FILE_NAME);
        assert!(matches!(&origin, ConfigOrigin::CreatedDefault(path) if *path == config_file));
        assert!(config_file.exists());

        let written = fs::read_to_string(config_file).unwrap();
        assert!(written.contains("endpoint_url"));
        assert!(written.contains("[carousel]"));
    }

    #[test]
    fn test_load_config_reads_existing_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "request_timeout_secs = 12\n",
        )
        .unwrap();

        let (config, origin) = manager.load_config(None).unwrap();
        assert_eq!(config.request_timeout_secs, 12);
        assert!(matches!(origin, ConfigOrigin::File(_)));
        assert!(!origin.is_fallback());
        assert!(config.ui.enable_animations);
    }

    #[test]
    fn test_load_config_handles_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "invalid_toml = [").unwrap();

        let (config, origin) = manager.load_config(None).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
        assert!(origin.is_fallback());
        match &origin {
            ConfigOrigin::Malformed { path, error } => {
                assert_eq!(path, &config_file);
                assert!(!error.to_string().is_empty());
            }
            other => panic!("expected malformed origin, got {other:?}"),
        }
        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "invalid_toml = [");
    }

    #[test]
    fn test_load_config_with_override_path() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "endpoint_url = \"http://localhost/exec\"\n").unwrap();

        let (config, origin) = manager.load_config(Some(&custom)).unwrap();
        assert!(matches!(&origin, ConfigOrigin::File(path) if *path == custom));
        assert_eq!(config.endpoint_url, "http://localhost/exec");
        assert!(!dir.path().join("unused").exists());
    }
}
