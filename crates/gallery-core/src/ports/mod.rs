//! Port interfaces for the application layer
//!
//! Ports define the contract between the photo session and the
//! infrastructure that talks to the outside world (photo service, file
//! system). The session only ever sees these traits.

pub mod file_download;
pub mod photo_search;

pub use file_download::{DownloadError, FileDownloadPort};
pub use photo_search::{ApiErrors, ApiResult, ClientError, PhotoSearchPort};
