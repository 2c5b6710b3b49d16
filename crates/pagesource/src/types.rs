//! Thumbnail types shared between page sources and their consumers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Requested thumbnail dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailSize {
    pub width: u32,
    pub height: u32,
}

impl ThumbnailSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A rendered page thumbnail.
///
/// The pixel data is behind an `Arc` so results stay cheap to clone as they
/// travel through batches and event fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailImage {
    pub size: ThumbnailSize,
    data: Arc<Vec<u8>>,
}

impl ThumbnailImage {
    pub fn new(size: ThumbnailSize, data: Vec<u8>) -> Self {
        Self {
            size,
            data: Arc::new(data),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
