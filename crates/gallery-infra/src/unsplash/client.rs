use std::time::Duration;

use async_trait::async_trait;
use gallery_core::ports::{ApiErrors, ApiResult, ClientError, PhotoSearchPort};
use gallery_core::{PhotoDetail, PhotoId, RandomPayload, SearchPage, TrackedDownload};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.unsplash.com";

const API_VERSION: &str = "v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body returned by the service on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// HTTP client for the Unsplash API, bound to one access key.
///
/// Requests carry `Authorization: Client-ID <key>` and `Accept-Version: v1`.
/// Non-2xx answers become [`ApiResult::Error`]; failures to obtain or
/// decode an answer become [`ClientError`].
pub struct UnsplashClient {
    http: reqwest::Client,
    api_url: String,
}

impl UnsplashClient {
    pub fn new(access_key: &str, api_url: impl Into<String>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Client-ID {}", access_key))
            .map_err(|e| ClientError::Transport(format!("invalid access key: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert("accept-version", HeaderValue::from_static(API_VERSION));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResult<T>, ClientError> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Service rejected request");
            return Ok(ApiResult::Error(ApiErrors::new(
                status.as_u16(),
                error_lines(status, &body),
            )));
        }

        serde_json::from_str(&body)
            .map(ApiResult::Success)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Error lines from a rejected response: the JSON `errors` array when
/// present, otherwise the raw body, otherwise the status reason.
fn error_lines(status: StatusCode, body: &str) -> Vec<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if !parsed.errors.is_empty() {
            return parsed.errors;
        }
    }

    let body = body.trim();
    if !body.is_empty() {
        return vec![body.to_string()];
    }

    vec![status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))]
}

#[async_trait]
impl PhotoSearchPort for UnsplashClient {
    async fn get_random(&self, count: u32) -> Result<ApiResult<RandomPayload>, ClientError> {
        self.get_json(&self.endpoint("/photos/random"), &[("count", count.to_string())])
            .await
    }

    async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<ApiResult<SearchPage>, ClientError> {
        self.get_json(
            &self.endpoint("/search/photos"),
            &[
                ("query", query.to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ],
        )
        .await
    }

    async fn get_photo(&self, photo_id: &PhotoId) -> Result<ApiResult<PhotoDetail>, ClientError> {
        self.get_json(&self.endpoint(&format!("/photos/{}", photo_id)), &[])
            .await
    }

    async fn track_download(
        &self,
        download_location: &str,
    ) -> Result<ApiResult<TrackedDownload>, ClientError> {
        // The location is an absolute URL handed out in the photo's links.
        self.get_json(download_location, &[]).await
    }
}
