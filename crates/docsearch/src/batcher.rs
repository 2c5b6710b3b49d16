//! Match batching worker.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::session::protocol::SessionEvent;
use crate::types::SearchResult;

/// Spawns a task that buffers scanner output and flushes it into the session
/// inbox as `MatchBatch` messages on a fixed cadence.
///
/// Batching only regroups results in time: order is preserved and nothing is
/// dropped. Empty flushes are skipped. When the match channel closes, any
/// final partial batch is flushed and a `ScanFinished` message follows. Every
/// message carries `run_id` so the session can discard output from a
/// superseded run.
pub(crate) fn spawn_batch_collector(
    run_id: u64,
    flush_interval: Duration,
    mut match_rx: mpsc::UnboundedReceiver<SearchResult>,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
) {
    tokio::spawn(async move {
        let mut pending: Vec<SearchResult> = Vec::new();
        let mut flush = tokio::time::interval(flush_interval);
        flush.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick of an interval completes immediately; consume it so
        // the first real flush lands one full interval in.
        flush.tick().await;

        loop {
            tokio::select! {
                received = match_rx.recv() => match received {
                    Some(result) => pending.push(result),
                    None => break,
                },
                _ = flush.tick() => {
                    if !pending.is_empty() {
                        let _ = event_tx.send(SessionEvent::MatchBatch {
                            run_id,
                            results: std::mem::take(&mut pending),
                        });
                    }
                }
            }
        }

        if !pending.is_empty() {
            let _ = event_tx.send(SessionEvent::MatchBatch {
                run_id,
                results: pending,
            });
        }
        let _ = event_tx.send(SessionEvent::ScanFinished { run_id });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    fn result(page_index: usize) -> SearchResult {
        SearchResult {
            page_index,
            thumbnail: None,
        }
    }

    async fn next_event(event_rx: &mut mpsc::UnboundedReceiver<SessionEvent>) -> SessionEvent {
        timeout(Duration::from_secs(2), event_rx.recv())
            .await
            .expect("timed out waiting for batcher")
            .expect("batcher hung up")
    }

    #[tokio::test]
    async fn exhaustion_flushes_final_batch_then_finishes() {
        let (match_tx, match_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        spawn_batch_collector(7, Duration::from_secs(60), match_rx, event_tx);

        match_tx.send(result(0)).expect("send");
        match_tx.send(result(2)).expect("send");
        drop(match_tx);

        let first = next_event(&mut event_rx).await;
        assert!(matches!(
            first,
            SessionEvent::MatchBatch { run_id: 7, ref results }
                if results.iter().map(|r| r.page_index).collect::<Vec<_>>() == vec![0, 2]
        ));

        let second = next_event(&mut event_rx).await;
        assert!(matches!(second, SessionEvent::ScanFinished { run_id: 7 }));
    }

    #[tokio::test]
    async fn empty_scan_skips_the_batch_entirely() {
        let (match_tx, match_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        spawn_batch_collector(3, Duration::from_millis(10), match_rx, event_tx);

        drop(match_tx);

        let only = next_event(&mut event_rx).await;
        assert!(matches!(only, SessionEvent::ScanFinished { run_id: 3 }));
    }

    #[tokio::test]
    async fn interval_flushes_while_the_scan_is_still_open() {
        let (match_tx, match_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        spawn_batch_collector(1, Duration::from_millis(25), match_rx, event_tx);

        match_tx.send(result(4)).expect("send");

        // The sender stays open: this batch can only come from a timed flush.
        let flushed = next_event(&mut event_rx).await;
        assert!(matches!(
            flushed,
            SessionEvent::MatchBatch { run_id: 1, ref results }
                if results.len() == 1 && results[0].page_index == 4
        ));

        drop(match_tx);
        let finished = next_event(&mut event_rx).await;
        assert!(matches!(finished, SessionEvent::ScanFinished { run_id: 1 }));
    }

    #[tokio::test]
    async fn order_is_preserved_across_timed_flushes() {
        let (match_tx, match_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        spawn_batch_collector(2, Duration::from_millis(20), match_rx, event_tx);

        for page_index in 0..5 {
            match_tx.send(result(page_index)).expect("send");
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        drop(match_tx);

        let mut pages = Vec::new();
        loop {
            match next_event(&mut event_rx).await {
                SessionEvent::MatchBatch { results, .. } => {
                    assert!(!results.is_empty());
                    pages.extend(results.iter().map(|r| r.page_index));
                }
                SessionEvent::ScanFinished { .. } => break,
                other => panic!("unexpected session event: {other:?}"),
            }
        }
        assert_eq!(pages, vec![0, 1, 2, 3, 4]);
    }
}
