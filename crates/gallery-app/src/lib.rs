//! Photo Gallery Application Layer
//!
//! This crate holds the photo session: the state a front-end renders and the
//! four operations that fill it from the photo service.

pub mod session;

pub use session::{
    DownloadParams, PhotoSession, SearchParams, SessionOptions, SessionState, SessionStore,
    NETWORK_ERROR,
};
