use serde::{Deserialize, Serialize};

use crate::ids::PhotoId;

/// Size variants of a photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoUrls {
    pub raw: String,
    pub full: String,
    pub regular: String,
    pub small: String,
    pub thumb: String,
}

/// Related links of a photo.
///
/// `download_location` is the endpoint that must be hit to register a download.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub html: String,
    pub download: String,
    pub download_location: String,
}

/// Author of a photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoUser {
    pub id: String,
    pub username: String,
    pub name: String,
    pub portfolio_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
}

/// Lightweight photo record returned by the random and search endpoints.
/// 随机/搜索接口返回的照片摘要
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSummary {
    pub id: PhotoId,
    pub created_at: Option<String>,
    pub width: u32,
    pub height: u32,
    pub color: Option<String>,
    pub blur_hash: Option<String>,
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub likes: u64,
    pub urls: PhotoUrls,
    pub links: PhotoLinks,
    pub user: PhotoUser,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoExif {
    pub make: Option<String>,
    pub model: Option<String>,
    pub exposure_time: Option<String>,
    pub aperture: Option<String>,
    pub focal_length: Option<String>,
    pub iso: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoLocation {
    pub name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Full record of one photo, with its view and download counters.
/// 单张照片的完整信息（含浏览量与下载量）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoDetail {
    #[serde(flatten)]
    pub summary: PhotoSummary,
    pub exif: Option<PhotoExif>,
    pub location: Option<PhotoLocation>,
    pub views: u64,
    pub downloads: u64,
}

impl PhotoDetail {
    pub fn id(&self) -> &PhotoId {
        &self.summary.id
    }
}
