//! # gallery-core
//!
//! Core domain models and ports for the photo gallery session.
//!
//! This crate contains pure data and contracts without any infrastructure dependencies.

pub mod config;
pub mod ids;
pub mod photo;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::PhotoId;
pub use photo::{PhotoDetail, PhotoSummary, RandomPayload, SearchPage, TrackedDownload};
