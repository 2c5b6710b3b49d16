
use std::sync::Arc;

use pagesource::{PageNavigator, PageSource};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::batcher::spawn_batch_collector;
use crate::bus::SearchBus;
use crate::config::SearchConfig;
use crate::event::{
    ResultsBatchPayload, SearchCompletedPayload, SearchEvent, StateChangedPayload,
};
use crate::matcher::QueryMatcher;
use crate::scanner::spawn_page_scan;
use crate::session::protocol::SessionEvent;
use crate::types::{SearchResult, SessionState};

pub(crate) struct SearchSessionActor {
    source: Option<Arc<dyn PageSource>>,
    navigator: Arc<dyn PageNavigator>,
    config: SearchConfig,
    bus: SearchBus,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
    event_rx: mpsc::UnboundedReceiver<SessionEvent>,
    pub(crate) state: SessionState,
    pub(crate) query: String,
    pub(crate) results: Vec<SearchResult>,
    run_seq: u64,
    debounce_seq: u64,
    pub(crate) active_run: Option<ActiveRun>,
    pending_debounce: Option<PendingDebounce>,
}

pub(crate) struct ActiveRun {
    pub(crate) run_id: u64,
    pub(crate) cancel_token: CancellationToken,
}

struct PendingDebounce {
    debounce_id: u64,
    cancel_token: CancellationToken,
}

impl SearchSessionActor {
    pub(crate) fn new(
        source: Option<Arc<dyn PageSource>>,
        navigator: Arc<dyn PageNavigator>,
        config: SearchConfig,
        bus: SearchBus,
        event_tx: mpsc::UnboundedSender<SessionEvent>,
        event_rx: mpsc::UnboundedReceiver<SessionEvent>,
    ) -> Self {
        Self {
            source,
            navigator,
            config,
            bus,
            event_tx,
            event_rx,
            state: SessionState::Idle,
            query: String::new(),
            results: Vec::new(),
            run_seq: 0,
            debounce_seq: 0,
            active_run: None,
            pending_debounce: None,
        }
    }

    pub(crate) async fn run(mut self) {
        while let Some(event) = self.event_rx.recv().await {
            match event {
                SessionEvent::QueryChanged { text } => self.handle_query_changed(text),
                SessionEvent::QueryCleared => self.handle_query_cleared(),
                SessionEvent::DebounceElapsed { debounce_id } => {
                    self.handle_debounce_elapsed(debounce_id)
                }
                SessionEvent::MatchBatch { run_id, results } => {
                    self.handle_match_batch(run_id, results)
                }
                SessionEvent::ScanFinished { run_id } => self.handle_scan_finished(run_id),
                SessionEvent::ResultSelected { result } => self.handle_result_selected(result),
                SessionEvent::Dismissed => {
                    self.handle_dismissed();
                    break;
                }
            }
        }
    }

    pub(crate) fn handle_query_changed(&mut self, text: String) {
        if self.state == SessionState::Cancelled {
            tracing::debug!("ignoring query change on a cancelled session");
            return;
        }
        if text.is_empty() {
            // An emptied query clears immediately, no quiet period.
            self.handle_query_cleared();
            return;
        }

        self.query = text;
        self.cancel_active_run();
        self.restart_debounce();
        self.set_state(SessionState::Debouncing);
    }

    pub(crate) fn handle_query_cleared(&mut self) {
        if self.state == SessionState::Cancelled {
            tracing::debug!("ignoring clear on a cancelled session");
            return;
        }

        self.cancel_pending_debounce();
        self.cancel_active_run();
        self.query.clear();
        self.results.clear();
        self.set_state(SessionState::Idle);
    }

    pub(crate) fn handle_debounce_elapsed(&mut self, debounce_id: u64) {
        match &self.pending_debounce {
            Some(pending) if pending.debounce_id == debounce_id => {}
            _ => {
                tracing::debug!(debounce_id, "discarding stale debounce trigger");
                return;
            }
        }
        self.pending_debounce = None;
        self.start_run();
    }

    pub(crate) fn handle_match_batch(&mut self, run_id: u64, results: Vec<SearchResult>) {
        match &self.active_run {
            Some(run) if run.run_id == run_id => {}
            _ => {
                tracing::debug!(run_id, "discarding batch from a superseded run");
                return;
            }
        }

        self.results.extend(results.iter().cloned());
        let _ = self.bus.publish(SearchEvent::ResultsBatch(ResultsBatchPayload {
            results,
            total: self.results.len(),
        }));
    }

    pub(crate) fn handle_scan_finished(&mut self, run_id: u64) {
        match &self.active_run {
            Some(run) if run.run_id == run_id => {}
            _ => {
                tracing::debug!(run_id, "discarding completion from a superseded run");
                return;
            }
        }

        self.active_run = None;
        self.set_state(SessionState::Completed);
        let _ = self
            .bus
            .publish(SearchEvent::SearchCompleted(SearchCompletedPayload {
                total: self.results.len(),
            }));
    }

    pub(crate) fn handle_result_selected(&mut self, result: SearchResult) {
        if self.state == SessionState::Cancelled {
            tracing::debug!("ignoring selection on a cancelled session");
            return;
        }

        self.cancel_pending_debounce();
        self.cancel_active_run();
        self.query.clear();
        self.navigator.go_to_page(result.page_index);
        self.set_state(SessionState::Cancelled);
    }

    fn handle_dismissed(&mut self) {
        self.cancel_pending_debounce();
        self.cancel_active_run();
        self.query.clear();
        self.results.clear();
        self.set_state(SessionState::Cancelled);
    }

    /// Clears the previous run's output and starts a fresh scanner+batcher
    /// pipeline bound to a new run id.
    fn start_run(&mut self) {
        self.results.clear();
        self.run_seq += 1;
        let run_id = self.run_seq;
        let cancel_token = CancellationToken::new();

        tracing::debug!(run_id, query = %self.query, "starting page scan");

        let (match_tx, match_rx) = mpsc::unbounded_channel();
        spawn_page_scan(
            self.source.clone(),
            QueryMatcher::new(&self.query, self.config.case_sensitive),
            self.config.thumbnail,
            cancel_token.clone(),
            match_tx,
        );
        spawn_batch_collector(
            run_id,
            self.config.batch_interval(),
            match_rx,
            self.event_tx.clone(),
        );

        self.active_run = Some(ActiveRun {
            run_id,
            cancel_token,
        });
        self.set_state(SessionState::Running);
    }

    fn restart_debounce(&mut self) {
        self.cancel_pending_debounce();
        self.debounce_seq += 1;
        let debounce_id = self.debounce_seq;
        let cancel_token = CancellationToken::new();

        let delay = self.config.debounce();
        let timer_cancel = cancel_token.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = timer_cancel.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = event_tx.send(SessionEvent::DebounceElapsed { debounce_id });
                }
            }
        });

        self.pending_debounce = Some(PendingDebounce {
            debounce_id,
            cancel_token,
        });
    }

    fn cancel_pending_debounce(&mut self) {
        if let Some(pending) = self.pending_debounce.take() {
            pending.cancel_token.cancel();
        }
    }

    fn cancel_active_run(&mut self) {
        if let Some(run) = self.active_run.take() {
            run.cancel_token.cancel();
        }
    }

    fn set_state(&mut self, state: SessionState) {
        if self.state == state {
            return;
        }
        self.state = state;
        let _ = self
            .bus
            .publish(SearchEvent::StateChanged(StateChangedPayload { state }));
    }
}
