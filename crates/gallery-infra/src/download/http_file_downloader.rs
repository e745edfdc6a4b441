use std::path::{Path, PathBuf};

use async_trait::async_trait;
use gallery_core::ports::{DownloadError, FileDownloadPort};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

const FALLBACK_FILE_NAME: &str = "photo";

/// Downloads files over HTTP into a fixed directory.
pub struct HttpFileDownloader {
    http: reqwest::Client,
    directory: PathBuf,
}

impl HttpFileDownloader {
    pub fn new(directory: PathBuf) -> Self {
        Self {
            http: reqwest::Client::new(),
            directory,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Target path for `file_name`, with an extension derived from the
    /// response content type when one is known.
    fn target_path(&self, file_name: &str, content_type: Option<&str>) -> PathBuf {
        let mut name: String = file_name
            .trim()
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
            .collect();
        if name.is_empty() {
            name = FALLBACK_FILE_NAME.to_string();
        }

        if let Some(ext) = content_type.and_then(extension_for) {
            name.push('.');
            name.push_str(ext);
        }

        self.directory.join(name)
    }
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();
    match mime.as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        "image/avif" => Some("avif"),
        _ => None,
    }
}

#[async_trait]
impl FileDownloadPort for HttpFileDownloader {
    async fn download(&self, url: &str, file_name: &str) -> Result<PathBuf, DownloadError> {
        debug!(url, file_name, "Downloading file");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DownloadError::Request(e.to_string()))?;

        let path = self.target_path(file_name, content_type.as_deref());
        tokio::fs::create_dir_all(&self.directory).await?;
        tokio::fs::write(&path, &bytes).await?;

        info!(path = %path.display(), size = bytes.len(), "File saved");
        Ok(path)
    }
}
