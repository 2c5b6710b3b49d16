//! Page scan worker.

use std::sync::Arc;

use pagesource::{PageSource, ThumbnailSize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::matcher::QueryMatcher;
use crate::types::SearchResult;

/// Spawns a task that walks every page in ascending order and sends one
/// [`SearchResult`] per match down `match_tx`.
///
/// The cancellation token is checked before each page, so thumbnail rendering
/// never delays a stop by more than one page's processing. A missing source
/// or an unreadable page is not an error: the former finishes immediately
/// with no results, the latter is skipped. Dropping the sender is the
/// exhaustion signal to the consumer.
pub(crate) fn spawn_page_scan(
    source: Option<Arc<dyn PageSource>>,
    matcher: QueryMatcher,
    thumbnail_size: ThumbnailSize,
    cancel_token: CancellationToken,
    match_tx: mpsc::UnboundedSender<SearchResult>,
) {
    tokio::spawn(async move {
        let Some(source) = source else {
            return;
        };

        for page_index in 0..source.page_count() {
            if cancel_token.is_cancelled() {
                return;
            }

            let text = source.page_text(page_index).await;
            if !matcher.matches(text.as_deref()) {
                continue;
            }

            let thumbnail = source.thumbnail(page_index, thumbnail_size).await;
            if match_tx
                .send(SearchResult {
                    page_index,
                    thumbnail,
                })
                .is_err()
            {
                return;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesource::InMemoryDocument;
    use tokio::time::{timeout, Duration};

    fn thumb_size() -> ThumbnailSize {
        ThumbnailSize::new(40, 60)
    }

    async fn collect(mut match_rx: mpsc::UnboundedReceiver<SearchResult>) -> Vec<SearchResult> {
        let mut results = Vec::new();
        while let Some(result) = timeout(Duration::from_secs(2), match_rx.recv())
            .await
            .expect("scan did not finish")
        {
            results.push(result);
        }
        results
    }

    #[tokio::test]
    async fn emits_matches_in_ascending_page_order() {
        let document = InMemoryDocument::from_texts(["apple", "banana", "apple pie"]);
        let (match_tx, match_rx) = mpsc::unbounded_channel();

        spawn_page_scan(
            Some(Arc::new(document)),
            QueryMatcher::new("apple", true),
            thumb_size(),
            CancellationToken::new(),
            match_tx,
        );

        let results = collect(match_rx).await;
        let pages: Vec<usize> = results.iter().map(|r| r.page_index).collect();
        assert_eq!(pages, vec![0, 2]);
        assert!(results.iter().all(|r| r.thumbnail.is_some()));
    }

    #[tokio::test]
    async fn unreadable_pages_are_skipped() {
        let document = InMemoryDocument::new(vec![
            Some("apple".to_string()),
            None,
            Some("apple tart".to_string()),
        ]);
        let (match_tx, match_rx) = mpsc::unbounded_channel();

        spawn_page_scan(
            Some(Arc::new(document)),
            QueryMatcher::new("apple", true),
            thumb_size(),
            CancellationToken::new(),
            match_tx,
        );

        let pages: Vec<usize> = collect(match_rx).await.iter().map(|r| r.page_index).collect();
        assert_eq!(pages, vec![0, 2]);
    }

    #[tokio::test]
    async fn missing_source_finishes_with_no_results() {
        let (match_tx, match_rx) = mpsc::unbounded_channel();

        spawn_page_scan(
            None,
            QueryMatcher::new("apple", true),
            thumb_size(),
            CancellationToken::new(),
            match_tx,
        );

        assert!(collect(match_rx).await.is_empty());
    }

    #[tokio::test]
    async fn cancelled_token_stops_the_scan_before_any_page() {
        let document = InMemoryDocument::from_texts(["apple"; 50]);
        let (match_tx, match_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();
        cancel_token.cancel();

        spawn_page_scan(
            Some(Arc::new(document)),
            QueryMatcher::new("apple", true),
            thumb_size(),
            cancel_token,
            match_tx,
        );

        assert!(collect(match_rx).await.is_empty());
    }
}
