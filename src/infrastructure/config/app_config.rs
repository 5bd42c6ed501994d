//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;
use crate::infrastructure::forms::DEFAULT_ENDPOINT_URL;

pub(crate) const APP_NAME: &str = "jlm-apply";
pub(crate) const APP_QUALIFIER: &str = "ma";
pub(crate) const APP_ORGANIZATION: &str = "club-jlm";

/// Shortest slide hold accepted from the config.
pub const MIN_SLIDE_DELAY_MS: u64 = 250;
/// Shortest submission timeout accepted from the config.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Form collector URL receiving applications.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// Submission request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Landing carousel configuration.
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// Landing carousel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Directory holding the slide images.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Slide file names, in display order. The first one is the cover.
    #[serde(default = "default_images")]
    pub images: Vec<String>,

    /// Hold time of the cover slide in milliseconds.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Hold time of every other slide in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl CarouselConfig {
    /// Returns the cover hold time, at least [`MIN_SLIDE_DELAY_MS`].
    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms.max(MIN_SLIDE_DELAY_MS))
    }

    /// Returns the rotation interval, at least [`MIN_SLIDE_DELAY_MS`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_SLIDE_DELAY_MS))
    }

    /// Returns full slide paths.
    #[must_use]
    pub fn image_paths(&self) -> Vec<PathBuf> {
        self.images
            .iter()
            .map(|name| self.assets_dir.join(name))
            .collect()
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            images: default_images(),
            initial_delay_ms: default_initial_delay_ms(),
            interval_ms: default_interval_ms(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` slide transitions.
    #[serde(default = "default_true")]
    pub enable_animations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
        }
    }
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_images() -> Vec<String> {
    [
        "jlm-university-group.jpg",
        "jlm-students-1.jpg",
        "jlm-students-2.jpg",
        "jlm-students-3.jpg",
        "jlm-students-4.jpg",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

const fn default_initial_delay_ms() -> u64 {
    7000
}

const fn default_interval_ms() -> u64 {
    4000
}

const fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(endpoint) = args.endpoint {
            self.endpoint_url = endpoint;
        }
        if let Some(timeout) = args.request_timeout {
            self.request_timeout_secs = timeout;
        }
        if let Some(assets_dir) = args.assets_dir {
            self.carousel.assets_dir = assets_dir;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
    }

    /// Returns the submission timeout. Zero is raised to one second.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(MIN_REQUEST_TIMEOUT_SECS))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("jlm-apply.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            endpoint_url: default_endpoint_url(),
            request_timeout_secs: default_request_timeout_secs(),
            carousel: CarouselConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            endpoint_url = "https://forms.example.test/exec"
            log_level = "debug"

            [carousel]
            assets_dir = "/srv/jlm/public"
            interval_ms = 2500

            [ui]
            enable_animations = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.endpoint_url, "https://forms.example.test/exec");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.carousel.assets_dir, PathBuf::from("/srv/jlm/public"));
        assert_eq!(config.carousel.interval(), Duration::from_millis(2500));
        assert_eq!(config.carousel.initial_delay(), Duration::from_millis(7000));
        assert_eq!(config.carousel.images.len(), 5);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(!config.ui.enable_animations);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.ui.enable_animations);
        assert_eq!(
            config.carousel.image_paths()[0],
            PathBuf::from("assets/jlm-university-group.jpg")
        );
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "jlm-apply",
            "--endpoint",
            "http://localhost:9000/exec",
            "--request-timeout",
            "5",
            "--assets-dir",
            "public",
            "--enable-animations",
            "false",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.endpoint_url, "http://localhost:9000/exec");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.carousel.assets_dir, PathBuf::from("public"));
        assert!(!config.ui.enable_animations);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_zero_delays_are_raised() {
        let toml_content = r#"
            request_timeout_secs = 0

            [carousel]
            initial_delay_ms = 0
            interval_ms = 0
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        let floor = Duration::from_millis(MIN_SLIDE_DELAY_MS);
        assert_eq!(config.carousel.initial_delay(), floor);
        assert_eq!(config.carousel.interval(), floor);
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_timeout_from_cli_is_raised() {
        let mut config = AppConfig::default();
        config.merge_with_args(CliArgs::parse_from(["jlm-apply", "--request-timeout", "0"]));

        assert_eq!(config.request_timeout_secs, 0);
        assert_eq!(config.request_timeout(), Duration::from_secs(1));
    }
}
