//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Resolve configured values against defaults / 解析配置默认值
//! - ✅ Create infra implementations (HTTP client, downloader) / 创建 infra 层具体实现
//! - ✅ Inject them into the photo session through port traits / 通过 Port trait 注入
//!
//! ## Architecture Principle / 架构原则
//!
//! > **This is the only place allowed to depend on gallery-infra and gallery-app simultaneously.**
//! > **这是唯一允许同时依赖 gallery-infra 和 gallery-app 的地方。**

use std::path::PathBuf;
use std::sync::Arc;

use gallery_app::session::{DEFAULT_PER_PAGE, DEFAULT_RANDOM_COUNT};
use gallery_app::{PhotoSession, SessionOptions, SessionStore};
use gallery_core::config::AppConfig;
use gallery_core::ports::{FileDownloadPort, PhotoSearchPort};
use gallery_infra::unsplash::DEFAULT_API_URL;
use gallery_infra::{HttpFileDownloader, UnsplashClient};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Photo service access key is not configured")]
    MissingAccessKey,

    #[error("Photo service client initialization failed: {0}")]
    ClientInit(String),
}

/// Configuration with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    pub access_key: String,
    pub api_url: String,
    pub options: SessionOptions,
    pub download_dir: PathBuf,
}

/// Apply defaults to the raw configuration.
///
/// - Empty `api_url` → the public Unsplash API
/// - Zero counts → 30 random photos, 25 results per page
/// - Empty download directory → the platform download directory, or the
///   current directory when there is none
pub fn resolve_settings(config: &AppConfig) -> WiringResult<ResolvedSettings> {
    if config.access_key.trim().is_empty() {
        return Err(WiringError::MissingAccessKey);
    }

    let api_url = if config.api_url.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        config.api_url.clone()
    };

    let options = SessionOptions {
        random_count: non_zero_or(config.random_count, DEFAULT_RANDOM_COUNT),
        per_page: non_zero_or(config.per_page, DEFAULT_PER_PAGE),
    };

    let download_dir = if config.download_dir.as_os_str().is_empty() {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    } else {
        config.download_dir.clone()
    };

    Ok(ResolvedSettings {
        access_key: config.access_key.clone(),
        api_url,
        options,
        download_dir,
    })
}

fn non_zero_or(value: u32, default: u32) -> u32 {
    if value == 0 {
        default
    } else {
        value
    }
}

/// Build a ready-to-use photo session from configuration.
pub fn wire_session(config: &AppConfig) -> WiringResult<PhotoSession> {
    let settings = resolve_settings(config)?;

    let api: Arc<dyn PhotoSearchPort> = Arc::new(
        UnsplashClient::new(&settings.access_key, settings.api_url.clone())
            .map_err(|e| WiringError::ClientInit(e.to_string()))?,
    );
    let downloader: Arc<dyn FileDownloadPort> =
        Arc::new(HttpFileDownloader::new(settings.download_dir.clone()));

    info!(
        api_url = %settings.api_url,
        download_dir = %settings.download_dir.display(),
        "Photo session wired"
    );

    Ok(PhotoSession::new(
        api,
        downloader,
        SessionStore::new(),
        settings.options,
    ))
}
