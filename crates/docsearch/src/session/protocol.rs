use crate::types::SearchResult;

/// Inbox messages for the session actor.
///
/// Caller input and pipeline output land in the same queue, which is what
/// serializes every state mutation. Pipeline messages carry the run id they
/// were produced under; the actor drops any that no longer match the active
/// run.
#[derive(Debug)]
pub enum SessionEvent {
    QueryChanged { text: String },
    QueryCleared,
    DebounceElapsed { debounce_id: u64 },
    MatchBatch { run_id: u64, results: Vec<SearchResult> },
    ScanFinished { run_id: u64 },
    ResultSelected { result: SearchResult },
    Dismissed,
}
