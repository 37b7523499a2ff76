//! Cross-collection search over the content catalog.
//!
//! This module normalizes every content family into one ordered index, matches
//! free-text queries against it, and projects matches into result descriptors.

// Module declarations
pub(crate) mod index;
pub(crate) mod normalize;
pub(crate) mod present;
pub(crate) mod query;
pub(crate) mod registry;

// Public re-exports (used via lib.rs)
pub use index::{IndexedEntry, NavigationTarget, SearchIndex, category_label};
pub use normalize::searchable_text;
pub use present::{PREVIEW_CHARS, ResultDescriptor, present, preview, summarize};
pub use query::{MIN_QUERY_CHARS, SearchQuery, search};
pub use registry::{Catalog, ContentRegistry};
