//! Photo session use case
//! 照片会话用例
//!
//! Every operation follows the same shape:
//!
//! ```text
//! set loading → await photo service → branch on result → write state → clear loading
//! ```
//!
//! Errors never escape an operation. Service-reported errors and transport
//! failures end up in `error_message`, except for downloads, whose failures
//! are only logged.

mod state;

pub use state::{SessionState, SessionStore};

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::anyhow;
use gallery_core::ports::{ApiResult, FileDownloadPort, PhotoSearchPort};
use gallery_core::{PhotoId, RandomPayload, SearchPage};
use tracing::{error, info, info_span, warn, Instrument};

use state::LoadingGuard;

/// Displayed whenever the photo service could not be reached.
pub const NETWORK_ERROR: &str = "Network error!";

pub const DEFAULT_RANDOM_COUNT: u32 = 30;
pub const DEFAULT_PER_PAGE: u32 = 25;

/// Request sizes used by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub random_count: u32,
    pub per_page: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            random_count: DEFAULT_RANDOM_COUNT,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub page: u32,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadParams {
    /// Download-tracking endpoint taken from the photo's links.
    pub download_location: String,
}

impl DownloadParams {
    pub fn new(download_location: impl Into<String>) -> Self {
        Self {
            download_location: download_location.into(),
        }
    }
}

/// Adapter between a front-end and the photo service.
///
/// ## Behavior / 行为
/// - Holds the session state in a shared [`SessionStore`]
/// - Operations take `&self` and may run concurrently; they share the
///   `loading` and `error_message` fields with last-write-wins semantics
pub struct PhotoSession {
    api: Arc<dyn PhotoSearchPort>,
    downloader: Arc<dyn FileDownloadPort>,
    store: SessionStore,
    options: SessionOptions,
}

impl PhotoSession {
    pub fn new(
        api: Arc<dyn PhotoSearchPort>,
        downloader: Arc<dyn FileDownloadPort>,
        store: SessionStore,
        options: SessionOptions,
    ) -> Self {
        Self {
            api,
            downloader,
            store,
            options,
        }
    }

    /// Handle to the session state.
    pub fn state(&self) -> &SessionStore {
        &self.store
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Fetch a batch of random photos.
    ///
    /// A batch replaces `random_photos`; a single photo is appended to it.
    /// Service errors leave `random_photos` untouched; transport failures
    /// clear it.
    pub async fn fetch_random_photos(&self) {
        let count = self.options.random_count;
        let span = info_span!("usecase.photo_session.fetch_random_photos", count);

        async {
            let _loading = LoadingGuard::begin(&self.store);

            match self.api.get_random(count).await {
                Ok(ApiResult::Error(errors)) => {
                    warn!(status = errors.status, "Random photos request rejected");
                    self.store.set_error(errors.joined());
                }
                Ok(ApiResult::Success(RandomPayload::Many(photos))) => {
                    info!(received = photos.len(), "Random photos replaced");
                    self.store.update(|state| state.random_photos = photos);
                }
                Ok(ApiResult::Success(RandomPayload::Single(photo))) => {
                    info!(photo_id = %photo.id, "Random photo appended");
                    self.store.update(|state| state.random_photos.push(photo));
                }
                Err(err) => {
                    error!(error = %err, "Failed to fetch random photos");
                    self.store.set_error(NETWORK_ERROR);
                    self.store.update(|state| state.random_photos.clear());
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Search photos matching `params.query`.
    ///
    /// # Behavior / 行为
    /// - Zero results: error becomes `"No search result found for <query>"`
    ///   and the empty page is stored
    /// - Service error: error recorded, results untouched
    /// - Success: error cleared, page stored
    /// - Transport failure: results reset to an empty page
    pub async fn search_photos(&self, params: SearchParams) {
        let span = info_span!(
            "usecase.photo_session.search_photos",
            query = %params.query,
            page = params.page
        );

        async {
            let _loading = LoadingGuard::begin(&self.store);

            let result = match self
                .api
                .search_photos(&params.query, params.page, self.options.per_page)
                .await
            {
                Ok(result) => result,
                Err(err) => {
                    error!(error = %err, "Failed to search photos");
                    self.store.set_error(NETWORK_ERROR);
                    self.store
                        .update(|state| state.search_results = SearchPage::empty());
                    return;
                }
            };

            match result {
                ApiResult::Success(page) if page.results.is_empty() => {
                    info!("Search returned no results");
                    self.store
                        .set_error(format!("No search result found for {}", params.query));
                    self.store.update(|state| state.search_results = page);
                }
                ApiResult::Error(errors) => {
                    warn!(status = errors.status, "Search request rejected");
                    self.store.set_error(errors.joined());
                }
                ApiResult::Success(page) => {
                    info!(
                        received = page.results.len(),
                        total = page.total,
                        "Search results updated"
                    );
                    self.store.set_error("");
                    self.store.update(|state| state.search_results = page);
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Fetch the full record of one photo into `current_photo`.
    pub async fn fetch_photo_details(&self, photo_id: &PhotoId) {
        let span = info_span!("usecase.photo_session.fetch_photo_details", photo_id = %photo_id);

        async {
            let _loading = LoadingGuard::begin(&self.store);

            match self.api.get_photo(photo_id).await {
                Ok(ApiResult::Error(errors)) => {
                    warn!(status = errors.status, "Photo detail request rejected");
                    self.store.set_error(errors.joined());
                }
                Ok(ApiResult::Success(detail)) => {
                    info!(views = detail.views, downloads = detail.downloads, "Photo detail loaded");
                    self.store
                        .update(|state| state.current_photo = Some(detail));
                }
                Err(err) => {
                    error!(error = %err, "Failed to fetch photo details");
                    self.store.set_error(NETWORK_ERROR);
                    self.store.update(|state| state.current_photo = None);
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Register a download and save the file under the current photo's id.
    ///
    /// Only a service-reported error reaches `error_message`. Every other
    /// failure is logged and swallowed. Returns the saved file's path.
    pub async fn download_photo(&self, params: DownloadParams) -> Option<PathBuf> {
        let span = info_span!(
            "usecase.photo_session.download_photo",
            download_location = %params.download_location
        );

        async {
            let _loading = LoadingGuard::begin(&self.store);

            match self.try_download(&params).await {
                Ok(path) => path,
                Err(err) => {
                    error!(error = %err, "Photo download failed");
                    None
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn try_download(&self, params: &DownloadParams) -> anyhow::Result<Option<PathBuf>> {
        let tracked = match self.api.track_download(&params.download_location).await? {
            ApiResult::Error(errors) => {
                warn!(status = errors.status, "Download tracking rejected");
                self.store.set_error(errors.joined());
                return Ok(None);
            }
            ApiResult::Success(tracked) => tracked,
        };

        let url = tracked
            .url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| anyhow!("Oops! something went wrong"))?;

        // File name comes from whatever photo is current when the URL arrives.
        let file_name = self
            .store
            .current_photo_id()
            .ok_or_else(|| anyhow!("No current photo to name the download after"))?;

        let path = self.downloader.download(&url, file_name.as_str()).await?;
        info!(path = %path.display(), "Photo downloaded");

        Ok(Some(path))
    }
}
