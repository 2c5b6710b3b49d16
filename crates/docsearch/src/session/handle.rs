use std::sync::Arc;

use pagesource::{PageNavigator, PageSource};
use tokio::sync::{broadcast, mpsc};

use crate::bus::SearchBus;
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::event::SearchEvent;
use crate::session::actor::SearchSessionActor;
use crate::session::protocol::SessionEvent;
use crate::types::SearchResult;

/// Caller-facing handle to a running search session.
///
/// Cheap to clone; every method hands a message to the session actor, which
/// applies it on its single event loop. Outbound notifications arrive on the
/// bus via [`SearchSessionHandle::subscribe`].
#[derive(Clone)]
pub struct SearchSessionHandle {
    event_tx: mpsc::UnboundedSender<SessionEvent>,
    bus: SearchBus,
}

impl SearchSessionHandle {
    pub fn subscribe(&self) -> broadcast::Receiver<SearchEvent> {
        self.bus.subscribe()
    }

    pub fn is_closed(&self) -> bool {
        self.event_tx.is_closed()
    }

    /// Delivers new query text. An empty string is the "no query" signal and
    /// clears the session immediately instead of debouncing.
    pub fn query_changed(&self, text: impl Into<String>) -> Result<()> {
        self.send(SessionEvent::QueryChanged { text: text.into() })
    }

    pub fn clear_query(&self) -> Result<()> {
        self.send(SessionEvent::QueryCleared)
    }

    /// Selects a result, cancelling any in-flight scan and navigating the
    /// viewer to the result's page.
    pub fn select_result(&self, result: SearchResult) -> Result<()> {
        self.send(SessionEvent::ResultSelected { result })
    }

    /// Tears the session down; the actor exits after processing this.
    pub fn dismiss(&self) -> Result<()> {
        self.send(SessionEvent::Dismissed)
    }

    fn send(&self, event: SessionEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .map_err(|_| SearchError::SessionStopped)
    }
}

/// Spawns a search session over `source` and returns its handle.
///
/// `source` may be `None` when no document is bound; searches then complete
/// immediately with zero results.
pub fn spawn_search_session(
    source: Option<Arc<dyn PageSource>>,
    navigator: Arc<dyn PageNavigator>,
    config: SearchConfig,
) -> SearchSessionHandle {
    let bus = SearchBus::new(config.bus_capacity);
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let actor = SearchSessionActor::new(
        source,
        navigator,
        config,
        bus.clone(),
        event_tx.clone(),
        event_rx,
    );

    tokio::spawn(async move {
        actor.run().await;
    });

    SearchSessionHandle { event_tx, bus }
}
