use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use ratatui_image::picker::Picker;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use jlm_apply::application::SubmitApplicationUseCase;
use jlm_apply::infrastructure::{
    AppConfig, BackdropLoader, CliArgs, ConfigOrigin, FormEndpointClient, StorageManager,
};
use jlm_apply::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, ConfigOrigin)> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let (mut config, origin) = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, origin))
}

fn create_app(config: &AppConfig, picker: Picker) -> Result<App> {
    let client = FormEndpointClient::with_endpoint(&config.endpoint_url, config.request_timeout())?;
    let submit_use_case = SubmitApplicationUseCase::new(Arc::new(client));
    let backdrop_loader = BackdropLoader::new(config.carousel.image_paths());

    Ok(App::new(config, submit_use_case, backdrop_loader, picker))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, origin) = load_config()?;
    init_logging(&config)?;
    origin.report();

    info!(
        version = jlm_apply::VERSION,
        endpoint = %config.endpoint_url,
        "Starting jlm-apply"
    );

    let mut terminal = ratatui::init();
    let picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::halfblocks());

    let result = match create_app(&config, picker) {
        Ok(app) => app.run(&mut terminal).await,
        Err(e) => Err(e),
    };

    ratatui::restore();

    result
}
