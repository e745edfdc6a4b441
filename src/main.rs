use std::path::PathBuf;

use gallery_core::config::AppConfig;
use photo_gallery_lib::bootstrap::{apply_env_overrides, init_tracing_subscriber, load_config, wire_session};
use tracing::{error, info, warn};

/// Environment variable pointing at the configuration file.
const CONFIG_PATH_ENV: &str = "PHOTO_GALLERY_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "gallery.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing_subscriber()?;
    dotenvy::dotenv().ok();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = match load_config(config_path.clone()) {
        Ok(config) => config,
        Err(e) => {
            // Environment variables alone may be enough to run.
            warn!(path = %config_path.display(), "Failed to load config: {:#}", e);
            AppConfig::empty()
        }
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    let session = wire_session(&config)?;
    session.fetch_random_photos().await;

    let state = session.state().snapshot();
    if state.error_message.is_empty() {
        info!(count = state.random_photos.len(), "Random photos fetched");
        for photo in &state.random_photos {
            info!(
                photo_id = %photo.id,
                author = %photo.user.name,
                url = %photo.urls.small,
                "Photo"
            );
        }
    } else {
        error!(error = %state.error_message, "Random photos unavailable");
    }

    Ok(())
}
