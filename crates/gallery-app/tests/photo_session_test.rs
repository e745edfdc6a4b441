//! Photo session behaviour against mocked ports.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gallery_app::{
    DownloadParams, PhotoSession, SearchParams, SessionOptions, SessionStore, NETWORK_ERROR,
};
use gallery_core::ports::{
    ApiErrors, ApiResult, ClientError, DownloadError, FileDownloadPort, PhotoSearchPort,
};
use gallery_core::{PhotoDetail, PhotoId, PhotoSummary, RandomPayload, SearchPage, TrackedDownload};
use mockall::mock;

mock! {
    pub Api {}

    #[async_trait]
    impl PhotoSearchPort for Api {
        async fn get_random(&self, count: u32) -> Result<ApiResult<RandomPayload>, ClientError>;
        async fn search_photos(
            &self,
            query: &str,
            page: u32,
            per_page: u32,
        ) -> Result<ApiResult<SearchPage>, ClientError>;
        async fn get_photo(&self, photo_id: &PhotoId) -> Result<ApiResult<PhotoDetail>, ClientError>;
        async fn track_download(
            &self,
            download_location: &str,
        ) -> Result<ApiResult<TrackedDownload>, ClientError>;
    }
}

mock! {
    pub Downloader {}

    #[async_trait]
    impl FileDownloadPort for Downloader {
        async fn download(&self, url: &str, file_name: &str) -> Result<PathBuf, DownloadError>;
    }
}

fn photo(id: &str) -> PhotoSummary {
    PhotoSummary {
        id: PhotoId::from(id),
        ..Default::default()
    }
}

fn detail(id: &str) -> PhotoDetail {
    PhotoDetail {
        summary: photo(id),
        views: 10,
        downloads: 2,
        ..Default::default()
    }
}

fn page(ids: &[&str]) -> SearchPage {
    SearchPage {
        results: ids.iter().map(|id| photo(id)).collect(),
        total: ids.len() as u64,
        total_pages: 1,
    }
}

fn rejected(errors: &[&str]) -> ApiErrors {
    ApiErrors::new(401, errors.iter().map(|e| e.to_string()).collect())
}

fn session(api: MockApi, downloader: MockDownloader, store: SessionStore) -> PhotoSession {
    PhotoSession::new(
        Arc::new(api),
        Arc::new(downloader),
        store,
        SessionOptions::default(),
    )
}

fn ids(photos: &[PhotoSummary]) -> Vec<String> {
    photos.iter().map(|p| p.id.to_string()).collect()
}

#[tokio::test]
async fn test_random_many_replaces_existing_photos() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    let mut seq = mockall::Sequence::new();
    api.expect_get_random()
        .withf(|count| *count == 30)
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(ApiResult::Success(RandomPayload::Single(photo("old")))));
    api.expect_get_random()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Ok(ApiResult::Success(RandomPayload::Many(vec![
                photo("a"),
                photo("b"),
                photo("c"),
            ])))
        });

    let session = session(api, MockDownloader::new(), store.clone());
    session.fetch_random_photos().await;
    session.fetch_random_photos().await;

    assert_eq!(ids(&store.random_photos()), vec!["a", "b", "c"]);
    assert!(!store.loading());
}

#[tokio::test]
async fn test_random_single_is_appended() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    let mut seq = mockall::Sequence::new();
    api.expect_get_random()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(ApiResult::Success(RandomPayload::Many(vec![photo("a")]))));
    api.expect_get_random()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(ApiResult::Success(RandomPayload::Single(photo("b")))));

    let session = session(api, MockDownloader::new(), store.clone());
    session.fetch_random_photos().await;
    session.fetch_random_photos().await;

    assert_eq!(ids(&store.random_photos()), vec!["a", "b"]);
}

#[tokio::test]
async fn test_random_is_idempotent_for_same_batch() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    api.expect_get_random()
        .times(2)
        .returning(|_| Ok(ApiResult::Success(RandomPayload::Many(vec![photo("x"), photo("y")]))));

    let session = session(api, MockDownloader::new(), store.clone());
    session.fetch_random_photos().await;
    let first = store.snapshot();
    session.fetch_random_photos().await;

    assert_eq!(store.snapshot(), first);
    assert_eq!(ids(&first.random_photos), vec!["x", "y"]);
}

#[tokio::test]
async fn test_random_service_error_keeps_photos() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    let mut seq = mockall::Sequence::new();
    api.expect_get_random()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(ApiResult::Success(RandomPayload::Many(vec![photo("a")]))));
    api.expect_get_random()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(ApiResult::Error(rejected(&["OAuth error", "invalid key"]))));

    let session = session(api, MockDownloader::new(), store.clone());
    session.fetch_random_photos().await;
    session.fetch_random_photos().await;

    assert_eq!(store.error_message(), "OAuth error,invalid key");
    assert_eq!(ids(&store.random_photos()), vec!["a"]);
}

#[tokio::test]
async fn test_random_transport_failure_clears_photos() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    let mut seq = mockall::Sequence::new();
    api.expect_get_random()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(ApiResult::Success(RandomPayload::Many(vec![photo("a")]))));
    api.expect_get_random()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(ClientError::Transport("connection refused".into())));

    let session = session(api, MockDownloader::new(), store.clone());
    session.fetch_random_photos().await;
    session.fetch_random_photos().await;

    assert_eq!(store.error_message(), NETWORK_ERROR);
    assert!(store.random_photos().is_empty());
    assert!(!store.loading());
}

#[tokio::test]
async fn test_loading_is_set_while_calls_are_in_flight() {
    let store = SessionStore::new();
    let mut api = MockApi::new();

    let rx = store.subscribe();
    api.expect_get_random().returning(move |_| {
        assert!(rx.borrow().loading);
        Ok(ApiResult::Success(RandomPayload::Many(vec![])))
    });
    let rx = store.subscribe();
    api.expect_search_photos().returning(move |_, _, _| {
        assert!(rx.borrow().loading);
        Err(ClientError::Transport("timeout".into()))
    });
    let rx = store.subscribe();
    api.expect_get_photo().returning(move |_| {
        assert!(rx.borrow().loading);
        Ok(ApiResult::Error(rejected(&["Not found"])))
    });
    let rx = store.subscribe();
    api.expect_track_download().returning(move |_| {
        assert!(rx.borrow().loading);
        Ok(ApiResult::Success(TrackedDownload { url: None }))
    });

    let session = session(api, MockDownloader::new(), store.clone());

    session.fetch_random_photos().await;
    assert!(!store.loading());
    session.search_photos(SearchParams::new("cats", 1)).await;
    assert!(!store.loading());
    session.fetch_photo_details(&PhotoId::from("abc")).await;
    assert!(!store.loading());
    session
        .download_photo(DownloadParams::new("https://api/photos/abc/download"))
        .await;
    assert!(!store.loading());
}

#[tokio::test]
async fn test_search_zero_results_reports_query() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    api.expect_search_photos()
        .withf(|query, page, per_page| {
            query.to_string() == "xyz123notfound" && *page == 1 && *per_page == 25
        })
        .times(1)
        .returning(|_, _, _| Ok(ApiResult::Success(SearchPage::empty())));

    let session = session(api, MockDownloader::new(), store.clone());
    session
        .search_photos(SearchParams::new("xyz123notfound", 1))
        .await;

    assert_eq!(
        store.error_message(),
        "No search result found for xyz123notfound"
    );
    assert!(store.search_results().results.is_empty());
}

#[tokio::test]
async fn test_search_success_clears_error_and_stores_page() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    let mut seq = mockall::Sequence::new();
    api.expect_search_photos()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Err(ClientError::Transport("offline".into())));
    api.expect_search_photos()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(ApiResult::Success(page(&["p1", "p2"]))));

    let session = session(api, MockDownloader::new(), store.clone());
    session.search_photos(SearchParams::new("dogs", 1)).await;
    assert_eq!(store.error_message(), NETWORK_ERROR);

    session.search_photos(SearchParams::new("dogs", 2)).await;

    assert_eq!(store.error_message(), "");
    let results = store.search_results();
    assert_eq!(ids(&results.results), vec!["p1", "p2"]);
    assert_eq!(results.total, 2);
}

#[tokio::test]
async fn test_search_service_error_keeps_previous_page() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    let mut seq = mockall::Sequence::new();
    api.expect_search_photos()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(ApiResult::Success(page(&["p1"]))));
    api.expect_search_photos()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(ApiResult::Error(rejected(&["Rate Limit Exceeded"]))));

    let session = session(api, MockDownloader::new(), store.clone());
    session.search_photos(SearchParams::new("sea", 1)).await;
    session.search_photos(SearchParams::new("sea", 2)).await;

    assert_eq!(store.error_message(), "Rate Limit Exceeded");
    assert_eq!(ids(&store.search_results().results), vec!["p1"]);
}

#[tokio::test]
async fn test_search_transport_failure_resets_results() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    let mut seq = mockall::Sequence::new();
    api.expect_search_photos()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Ok(ApiResult::Success(page(&["p1"]))));
    api.expect_search_photos()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Err(ClientError::Decode("unexpected EOF".into())));

    let session = session(api, MockDownloader::new(), store.clone());
    session.search_photos(SearchParams::new("sea", 1)).await;
    session.search_photos(SearchParams::new("sea", 2)).await;

    assert_eq!(store.error_message(), NETWORK_ERROR);
    assert_eq!(
        store.search_results(),
        SearchPage {
            results: vec![],
            total: 0,
            total_pages: 0
        }
    );
}

#[tokio::test]
async fn test_details_service_error_keeps_current_photo() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    api.expect_get_photo()
        .withf(|id| id.as_str() == "first")
        .returning(|_| Ok(ApiResult::Success(detail("first"))));
    api.expect_get_photo()
        .withf(|id| id.as_str() == "abc")
        .returning(|_| Ok(ApiResult::Error(rejected(&["Couldn't find Photo"]))));

    let session = session(api, MockDownloader::new(), store.clone());
    session.fetch_photo_details(&PhotoId::from("first")).await;
    session.fetch_photo_details(&PhotoId::from("abc")).await;

    assert_eq!(store.error_message(), "Couldn't find Photo");
    let current = store.current_photo().expect("photo should be kept");
    assert_eq!(current.id().as_str(), "first");
    assert_eq!(current.views, 10);
}

#[tokio::test]
async fn test_details_transport_failure_clears_current_photo() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    let mut seq = mockall::Sequence::new();
    api.expect_get_photo()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(ApiResult::Success(detail("first"))));
    api.expect_get_photo()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(ClientError::Transport("reset by peer".into())));

    let session = session(api, MockDownloader::new(), store.clone());
    session.fetch_photo_details(&PhotoId::from("first")).await;
    session.fetch_photo_details(&PhotoId::from("first")).await;

    assert_eq!(store.error_message(), NETWORK_ERROR);
    assert!(store.current_photo().is_none());
}

#[tokio::test]
async fn test_download_uses_current_photo_id_as_file_name() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    api.expect_get_photo()
        .returning(|_| Ok(ApiResult::Success(detail("Dwu85P9SOIk"))));
    api.expect_track_download()
        .withf(|location| location.to_string() == "https://api/photos/Dwu85P9SOIk/download")
        .returning(|_| {
            Ok(ApiResult::Success(TrackedDownload {
                url: Some("https://images/Dwu85P9SOIk.jpg".into()),
            }))
        });

    let mut downloader = MockDownloader::new();
    downloader
        .expect_download()
        .withf(|url, file_name| {
            url.to_string() == "https://images/Dwu85P9SOIk.jpg" && file_name.to_string() == "Dwu85P9SOIk"
        })
        .times(1)
        .returning(|_, name| Ok(PathBuf::from(format!("/downloads/{name}.jpg"))));

    let session = session(api, downloader, store.clone());
    session.fetch_photo_details(&PhotoId::from("Dwu85P9SOIk")).await;
    let saved = session
        .download_photo(DownloadParams::new("https://api/photos/Dwu85P9SOIk/download"))
        .await;

    assert_eq!(saved, Some(PathBuf::from("/downloads/Dwu85P9SOIk.jpg")));
    assert!(!store.loading());
}

#[tokio::test]
async fn test_download_without_url_is_silent() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    api.expect_track_download()
        .returning(|_| Ok(ApiResult::Success(TrackedDownload { url: None })));
    let mut downloader = MockDownloader::new();
    downloader.expect_download().never();

    let session = session(api, downloader, store.clone());
    let saved = session
        .download_photo(DownloadParams::new("https://api/photos/abc/download"))
        .await;

    assert_eq!(saved, None);
    assert_eq!(store.error_message(), "");
    assert!(!store.loading());
}

#[tokio::test]
async fn test_download_service_error_is_reported() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    api.expect_track_download()
        .returning(|_| Ok(ApiResult::Error(rejected(&["Not authorized"]))));
    let mut downloader = MockDownloader::new();
    downloader.expect_download().never();

    let session = session(api, downloader, store.clone());
    session
        .download_photo(DownloadParams::new("https://api/photos/abc/download"))
        .await;

    assert_eq!(store.error_message(), "Not authorized");
}

#[tokio::test]
async fn test_download_failures_never_touch_error_message() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    api.expect_get_photo()
        .returning(|_| Ok(ApiResult::Success(detail("abc"))));
    api.expect_track_download()
        .returning(|_| Err(ClientError::Transport("offline".into())));
    let mut downloader = MockDownloader::new();
    downloader.expect_download().never();

    let session = session(api, downloader, store.clone());
    session.fetch_photo_details(&PhotoId::from("abc")).await;
    session
        .download_photo(DownloadParams::new("https://api/photos/abc/download"))
        .await;

    assert_eq!(store.error_message(), "");
}

#[tokio::test]
async fn test_download_write_failure_is_only_logged() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    api.expect_get_photo()
        .returning(|_| Ok(ApiResult::Success(detail("abc"))));
    api.expect_track_download().returning(|_| {
        Ok(ApiResult::Success(TrackedDownload {
            url: Some("https://images/abc.jpg".into()),
        }))
    });
    let mut downloader = MockDownloader::new();
    downloader
        .expect_download()
        .times(1)
        .returning(|_, _| Err(DownloadError::Status(503)));

    let session = session(api, downloader, store.clone());
    session.fetch_photo_details(&PhotoId::from("abc")).await;
    let saved = session
        .download_photo(DownloadParams::new("https://api/photos/abc/download"))
        .await;

    assert_eq!(saved, None);
    assert_eq!(store.error_message(), "");
}

#[tokio::test]
async fn test_download_without_current_photo_skips_download() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    api.expect_track_download().returning(|_| {
        Ok(ApiResult::Success(TrackedDownload {
            url: Some("https://images/abc.jpg".into()),
        }))
    });
    let mut downloader = MockDownloader::new();
    downloader.expect_download().never();

    let session = session(api, downloader, store.clone());
    let saved = session
        .download_photo(DownloadParams::new("https://api/photos/abc/download"))
        .await;

    assert_eq!(saved, None);
    assert_eq!(store.error_message(), "");
}

#[tokio::test]
async fn test_concurrent_operations_end_not_loading() {
    let store = SessionStore::new();
    let mut api = MockApi::new();
    api.expect_get_random()
        .returning(|_| Ok(ApiResult::Success(RandomPayload::Many(vec![photo("r")]))));
    api.expect_search_photos()
        .returning(|_, _, _| Ok(ApiResult::Success(page(&["s"]))));

    let session = session(api, MockDownloader::new(), store.clone());
    tokio::join!(
        session.fetch_random_photos(),
        session.search_photos(SearchParams::new("mix", 1)),
    );

    assert!(!store.loading());
    assert_eq!(ids(&store.random_photos()), vec!["r"]);
    assert_eq!(ids(&store.search_results().results), vec!["s"]);
}

/// Service that never answers.
struct StalledApi;

#[async_trait]
impl PhotoSearchPort for StalledApi {
    async fn get_random(&self, _count: u32) -> Result<ApiResult<RandomPayload>, ClientError> {
        std::future::pending().await
    }

    async fn search_photos(
        &self,
        _query: &str,
        _page: u32,
        _per_page: u32,
    ) -> Result<ApiResult<SearchPage>, ClientError> {
        std::future::pending().await
    }

    async fn get_photo(&self, _photo_id: &PhotoId) -> Result<ApiResult<PhotoDetail>, ClientError> {
        std::future::pending().await
    }

    async fn track_download(
        &self,
        _download_location: &str,
    ) -> Result<ApiResult<TrackedDownload>, ClientError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn test_abandoned_operation_clears_loading() {
    let store = SessionStore::new();
    let session = PhotoSession::new(
        Arc::new(StalledApi),
        Arc::new(MockDownloader::new()),
        store.clone(),
        SessionOptions::default(),
    );

    let mut rx = store.subscribe();
    let outcome =
        tokio::time::timeout(Duration::from_millis(20), session.fetch_random_photos()).await;

    assert!(outcome.is_err());
    assert!(rx.has_changed().unwrap());
    assert!(!rx.borrow_and_update().loading);
    assert!(!store.loading());
}

#[tokio::test]
async fn test_state_snapshot_serializes_for_front_end() {
    let store = SessionStore::new();
    let value = serde_json::to_value(store.snapshot()).unwrap();

    assert_eq!(value["loading"], serde_json::json!(false));
    assert_eq!(value["error_message"], serde_json::json!(""));
    assert_eq!(value["current_photo"], serde_json::Value::Null);
    assert_eq!(value["search_results"]["total_pages"], serde_json::json!(0));
}
