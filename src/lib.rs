pub mod cli;
pub mod content;
pub mod error;
pub mod schema;
pub mod search;
pub mod server;
pub mod sources;
pub mod tools;
pub mod tracing;

pub use content::{ContentItem, Filter, Variant};
pub use error::{FilterParseError, SourceError};
pub use search::{
    Catalog, ContentRegistry, IndexedEntry, ResultDescriptor, SearchIndex, SearchQuery,
};
pub use server::CatalogServer;
pub use sources::ContentSource;

/// Search the built-in catalog with raw user input.
pub fn search(text: &str, filter: Filter) -> Vec<ResultDescriptor> {
    Catalog::global().search(text, filter)
}

/// The closed set of selectable filters.
pub const fn list_variants() -> &'static [Variant] {
    Catalog::list_variants()
}
