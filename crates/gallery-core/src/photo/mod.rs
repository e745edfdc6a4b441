//! Photo domain models
//! 照片领域模型
//!
//! Records mirror the photo service's JSON shape so the same values can be
//! handed to a front-end untouched. Every field tolerates absence.

mod model;
mod random;
mod search;

pub use model::{PhotoDetail, PhotoExif, PhotoLinks, PhotoLocation, PhotoSummary, PhotoUrls, PhotoUser};
pub use random::RandomPayload;
pub use search::SearchPage;

use serde::{Deserialize, Serialize};

/// Response of the download-tracking endpoint.
/// 下载追踪接口的响应
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackedDownload {
    #[serde(default)]
    pub url: Option<String>,
}
