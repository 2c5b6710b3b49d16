//! Core search types.

use pagesource::ThumbnailImage;

/// Lifecycle state of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No query, no results.
    Idle,
    /// A query was typed and its quiet period is still running.
    Debouncing,
    /// A scan is in flight.
    Running,
    /// The scan exhausted every page; results remain available.
    Completed,
    /// Terminal: a result was selected or the session was dismissed.
    Cancelled,
}

impl SessionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Debouncing => "debouncing",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A single matched page.
///
/// Unique per (run, page index); produced in ascending page order. The
/// thumbnail is absent when the source cannot render one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub page_index: usize,
    pub thumbnail: Option<ThumbnailImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_names_are_stable() {
        assert_eq!(SessionState::Idle.as_str(), "idle");
        assert_eq!(SessionState::Debouncing.as_str(), "debouncing");
        assert_eq!(SessionState::Running.as_str(), "running");
        assert_eq!(SessionState::Completed.as_str(), "completed");
        assert_eq!(SessionState::Cancelled.as_str(), "cancelled");
    }
}
