use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("download request failed: {0}")]
    Request(String),

    #[error("download returned status {0}")]
    Status(u16),

    #[error("failed to write downloaded file: {0}")]
    Io(#[from] std::io::Error),
}

/// Saves a remote file locally.
/// 将远程文件保存到本地
#[async_trait]
pub trait FileDownloadPort: Send + Sync {
    /// Download `url` and store it under the suggested `file_name`.
    /// Returns the path the file was written to.
    async fn download(&self, url: &str, file_name: &str) -> Result<PathBuf, DownloadError>;
}
