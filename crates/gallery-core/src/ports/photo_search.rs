use async_trait::async_trait;
use thiserror::Error;

use crate::ids::PhotoId;
use crate::photo::{PhotoDetail, RandomPayload, SearchPage, TrackedDownload};

/// Errors reported by the photo service itself (non-2xx responses).
/// 图片服务返回的业务错误
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrors {
    pub status: u16,
    pub errors: Vec<String>,
}

impl ApiErrors {
    pub fn new(status: u16, errors: Vec<String>) -> Self {
        Self { status, errors }
    }

    /// All error lines joined into one display string.
    pub fn joined(&self) -> String {
        self.errors.join(",")
    }
}

/// Outcome of a call that reached the photo service.
///
/// Transport-level failures never end up here; they are reported through
/// [`ClientError`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Error(ApiErrors),
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            ApiResult::Success(value) => Some(value),
            ApiResult::Error(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success(value) => ApiResult::Success(f(value)),
            ApiResult::Error(errors) => ApiResult::Error(errors),
        }
    }
}

/// Failures that prevented a service answer from being obtained at all.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Photo search service client.
/// 图片搜索服务客户端
///
/// Every method distinguishes errors the service reported (`Ok(ApiResult::Error)`)
/// from failures to talk to it at all (`Err(ClientError)`).
#[async_trait]
pub trait PhotoSearchPort: Send + Sync {
    /// Fetch `count` random photos.
    async fn get_random(&self, count: u32) -> Result<ApiResult<RandomPayload>, ClientError>;

    /// Fetch one page of photos matching `query`.
    async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ApiResult<SearchPage>, ClientError>;

    /// Fetch the full record of a single photo.
    async fn get_photo(&self, photo_id: &PhotoId) -> Result<ApiResult<PhotoDetail>, ClientError>;

    /// Register a download and obtain the URL to fetch the file from.
    async fn track_download(
        &self,
        download_location: &str,
    ) -> Result<ApiResult<TrackedDownload>, ClientError>;
}
