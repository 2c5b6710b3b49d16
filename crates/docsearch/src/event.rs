use crate::types::{SearchResult, SessionState};

/// Outbound notifications published on the session bus.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    StateChanged(StateChangedPayload),
    ResultsBatch(ResultsBatchPayload),
    SearchCompleted(SearchCompletedPayload),
}

#[derive(Debug, Clone)]
pub struct StateChangedPayload {
    pub state: SessionState,
}

#[derive(Debug, Clone)]
pub struct ResultsBatchPayload {
    /// Results appended by this batch, in ascending page order.
    pub results: Vec<SearchResult>,
    /// Cumulative result count after applying the batch.
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct SearchCompletedPayload {
    pub total: usize,
}
