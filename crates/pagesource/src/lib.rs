//! Document capabilities consumed by the search core.
//!
//! A paginated document is reached only through the [`PageSource`] trait;
//! navigation back into the viewer goes through [`PageNavigator`]. The crate
//! also ships [`InMemoryDocument`], a deterministic source used by tests and
//! downstream demos.

pub mod memory;
pub mod navigate;
pub mod source;
pub mod types;

pub use crate::memory::InMemoryDocument;
pub use crate::navigate::PageNavigator;
pub use crate::source::PageSource;
pub use crate::types::{ThumbnailImage, ThumbnailSize};
