//! Session state and its observable store
//! 会话状态及其可订阅的存储

use std::sync::Arc;

use gallery_core::{PhotoDetail, PhotoId, PhotoSummary, SearchPage};
use serde::Serialize;
use tokio::sync::watch;

/// Everything a front-end renders for one photo session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    /// True while a tracked call is in flight.
    pub loading: bool,
    /// Empty means "no error".
    pub error_message: String,
    /// `None` until a detail fetch succeeds.
    pub current_photo: Option<PhotoDetail>,
    pub search_results: SearchPage,
    pub random_photos: Vec<PhotoSummary>,
}

/// Shared, observable container for [`SessionState`].
///
/// Cloning the store yields another handle to the same state. Every mutation
/// is published to receivers obtained from [`SessionStore::subscribe`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<SessionState>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Receive a notification on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        self.tx.borrow().loading
    }

    pub fn error_message(&self) -> String {
        self.tx.borrow().error_message.clone()
    }

    pub fn current_photo(&self) -> Option<PhotoDetail> {
        self.tx.borrow().current_photo.clone()
    }

    pub fn search_results(&self) -> SearchPage {
        self.tx.borrow().search_results.clone()
    }

    pub fn random_photos(&self) -> Vec<PhotoSummary> {
        self.tx.borrow().random_photos.clone()
    }

    pub(crate) fn current_photo_id(&self) -> Option<PhotoId> {
        self.tx
            .borrow()
            .current_photo
            .as_ref()
            .map(|photo| photo.id().clone())
    }

    /// No re-entrancy guard: concurrent calls share this one flag.
    pub(crate) fn set_loading(&self, value: bool) {
        self.tx.send_modify(|state| state.loading = value);
    }

    /// Store `message` as the displayed error; an empty message clears it.
    pub(crate) fn set_error(&self, message: impl Into<String>) {
        let message = message.into();
        self.tx.send_modify(|state| state.error_message = message);
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut SessionState)) {
        self.tx.send_modify(f);
    }
}

/// Holds the loading flag up for the lifetime of one operation.
///
/// The flag is cleared on drop, so a caller abandoning the operation future
/// does not leave the session stuck in the loading state.
pub(crate) struct LoadingGuard<'a> {
    store: &'a SessionStore,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn begin(store: &'a SessionStore) -> Self {
        store.set_loading(true);
        Self { store }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.set_loading(false);
    }
}
