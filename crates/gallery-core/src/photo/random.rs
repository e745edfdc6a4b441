use serde::{Deserialize, Serialize};

use super::PhotoSummary;

/// Payload of the random-photo endpoint.
///
/// The service answers with an array when a count is requested and with a
/// single object otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RandomPayload {
    Many(Vec<PhotoSummary>),
    Single(PhotoSummary),
}

impl RandomPayload {
    pub fn len(&self) -> usize {
        match self {
            RandomPayload::Many(photos) => photos.len(),
            RandomPayload::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
