use serde::{Deserialize, Serialize};

use super::PhotoSummary;

/// One page of search results.
/// 搜索结果分页
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPage {
    pub results: Vec<PhotoSummary>,
    pub total: u64,
    pub total_pages: u64,
}

impl SearchPage {
    /// Page with no results and zero totals.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
