//! Incremental, debounced, cancellable full-text search over a paginated
//! document.
//!
//! A [`session`] is a tokio actor owning the query, the active scan and the
//! accumulated results. Query input is debounced; each run scans pages in
//! order through a [`pagesource::PageSource`], streams matches back in timed
//! batches, and is cancelled cooperatively whenever it is superseded.

pub mod bus;
pub mod config;
pub mod error;
pub mod event;
pub mod matcher;
pub mod session;
pub mod types;

mod batcher;
mod scanner;

pub use crate::bus::SearchBus;
pub use crate::config::SearchConfig;
pub use crate::error::{Result, SearchError};
pub use crate::event::SearchEvent;
pub use crate::matcher::QueryMatcher;
pub use crate::session::handle::{spawn_search_session, SearchSessionHandle};
pub use crate::types::{SearchResult, SessionState};
