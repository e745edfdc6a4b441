//! # gallery-infra
//!
//! Infrastructure adapters implementing the `gallery-core` ports:
//!
//! - [`unsplash::UnsplashClient`] talks to the photo service over HTTP
//! - [`download::HttpFileDownloader`] saves downloaded photos to disk

pub mod download;
pub mod unsplash;

pub use download::HttpFileDownloader;
pub use unsplash::UnsplashClient;
