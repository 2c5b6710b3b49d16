use async_trait::async_trait;

use crate::source::PageSource;
use crate::types::{ThumbnailImage, ThumbnailSize};

/// A document held entirely in memory.
///
/// Each page is an optional text; `None` models a page whose content could
/// not be extracted. Thumbnails are deterministic placeholder blobs stamped
/// with the page index, which keeps assertions in tests straightforward.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    pages: Vec<Option<String>>,
}

impl InMemoryDocument {
    pub fn new(pages: Vec<Option<String>>) -> Self {
        Self { pages }
    }

    /// Builds a document where every page has extractable text.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: texts.into_iter().map(|text| Some(text.into())).collect(),
        }
    }
}

#[async_trait]
impl PageSource for InMemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn page_text(&self, index: usize) -> Option<String> {
        self.pages.get(index)?.clone()
    }

    async fn thumbnail(&self, index: usize, size: ThumbnailSize) -> Option<ThumbnailImage> {
        let data = format!("thumb:{index}:{}x{}", size.width, size.height).into_bytes();
        Some(ThumbnailImage::new(size, data))
    }
}
