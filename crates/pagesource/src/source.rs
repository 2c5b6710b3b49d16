use async_trait::async_trait;

use crate::types::{ThumbnailImage, ThumbnailSize};

/// Read-only access to a paginated document.
///
/// Pages are 0-indexed and the document is immutable for the lifetime of the
/// source. Implementations are shared across tasks behind an `Arc`, so every
/// method takes `&self`.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extracted text of the page at `index`.
    ///
    /// Returns `None` when the page has no extractable text or cannot be
    /// read; callers treat that as a page that never matches, not an error.
    async fn page_text(&self, index: usize) -> Option<String>;

    /// Renders a thumbnail for the page at `index`.
    ///
    /// May be expensive; the search core only calls this for matched pages.
    async fn thumbnail(&self, index: usize, size: ThumbnailSize) -> Option<ThumbnailImage>;
}
