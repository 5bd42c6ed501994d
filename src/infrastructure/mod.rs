//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Form collector HTTP client.
pub mod forms;
/// Carousel image loading.
pub mod image;

pub use config::{AppConfig, CliArgs, ConfigOrigin, LogLevel, StorageManager};
pub use forms::{DEFAULT_ENDPOINT_URL, FormEndpointClient};
pub use self::image::{BackdropError, BackdropLoadedEvent, BackdropLoader};
