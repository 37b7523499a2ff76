//! Content registry and the process-wide catalog.
//!
//! The registry pulls every source once and turns its records into indexed
//! entries. The [`Catalog`] memoizes that index: it is built on first use and
//! then shared, unchanged, by every search for the rest of the process.

use super::index::{IndexedEntry, SearchIndex};
use super::present::{ResultDescriptor, present};
use super::query::{SearchQuery, search};
use crate::content::{Filter, Variant};
use crate::sources::{self, ContentSource};
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;
use std::time::Instant;

/// The fixed set of content sources, in concatenation order.
pub struct ContentRegistry {
    sources: Vec<Box<dyn ContentSource>>,
}

impl std::fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRegistry")
            .field(
                "sources",
                &self.sources.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ContentRegistry {
    pub fn new(sources: Vec<Box<dyn ContentSource>>) -> Self {
        Self { sources }
    }

    /// Registry over the collections compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(sources::builtin())
    }

    /// Build a fresh index from every source.
    ///
    /// A source that fails or panics contributes nothing; the rest of the
    /// catalog is still indexed.
    pub fn build_index(&self) -> SearchIndex {
        let start = Instant::now();
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for source in &self.sources {
            match panic::catch_unwind(AssertUnwindSafe(|| source.records())) {
                Ok(Ok(records)) => {
                    tracing::debug!(
                        "Indexed {} {} record(s) from '{}'",
                        records.len(),
                        source.variant().filter_id(),
                        source.name()
                    );
                    entries.extend(records.into_iter().map(IndexedEntry::new));
                }
                Ok(Err(e)) => {
                    skipped += 1;
                    tracing::warn!("Skipping content source '{}': {}", source.name(), e);
                }
                Err(payload) => {
                    skipped += 1;
                    tracing::warn!(
                        "Skipping content source '{}': panicked: {}",
                        source.name(),
                        panic_message(payload.as_ref())
                    );
                }
            }
        }

        tracing::info!(
            "Built search index: {} entries from {} source(s) ({} skipped) in {:?}",
            entries.len(),
            self.sources.len() - skipped,
            skipped,
            start.elapsed()
        );

        SearchIndex::new(entries)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

/// A registry plus its lazily built, never invalidated index.
#[derive(Debug)]
pub struct Catalog {
    registry: ContentRegistry,
    index: OnceLock<SearchIndex>,
}

impl Catalog {
    pub const fn new(registry: ContentRegistry) -> Self {
        Self {
            registry,
            index: OnceLock::new(),
        }
    }

    /// The process-wide catalog over the built-in collections.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Catalog> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::new(ContentRegistry::builtin()))
    }

    /// The search index, built on first call.
    pub fn index(&self) -> &SearchIndex {
        self.index.get_or_init(|| self.registry.build_index())
    }

    /// Whether the index has been built yet.
    pub fn is_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// Matching entries for `query`, in index order.
    pub fn matches(&self, query: &SearchQuery) -> Vec<&IndexedEntry> {
        search(query, self.index())
    }

    /// Search with raw user input and present the matches.
    pub fn search(&self, text: &str, filter: Filter) -> Vec<ResultDescriptor> {
        self.matches(&SearchQuery::new(text, filter))
            .into_iter()
            .map(present)
            .collect()
    }

    /// The selectable filters, in display order.
    pub const fn list_variants() -> &'static [Variant] {
        &Variant::ALL
    }

    /// Entry count per variant, in [`Variant::ALL`] order.
    pub fn variant_counts(&self) -> Vec<(Variant, usize)> {
        self.index().variant_counts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentItem, Pattern};
    use crate::error::SourceError;
    use assert2::check;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting {
        calls: Arc<AtomicUsize>,
    }

    impl ContentSource for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn variant(&self) -> Variant {
            Variant::Pattern
        }

        fn records(&self) -> Result<Vec<ContentItem>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![ContentItem::Pattern(Pattern {
                name: "Observer Pattern".into(),
                ..Pattern::default()
            })])
        }
    }

    struct Failing;

    impl ContentSource for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn variant(&self) -> Variant {
            Variant::Tool
        }

        fn records(&self) -> Result<Vec<ContentItem>, SourceError> {
            Err(SourceError::Malformed {
                source_name: "failing".into(),
                source: serde_json::from_str::<serde_json::Value>("[").unwrap_err(),
            })
        }
    }

    #[test]
    fn test_index_is_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let catalog = Catalog::new(ContentRegistry::new(vec![Box::new(Counting {
            calls: calls.clone(),
        })]));

        check!(!catalog.is_built());
        let first: *const SearchIndex = catalog.index();
        let second: *const SearchIndex = catalog.index();
        catalog.search("observer", Filter::All);

        check!(catalog.is_built());
        check!(std::ptr::eq(first, second));
        check!(calls.load(Ordering::SeqCst) == 1);
    }

    #[test]
    fn test_failing_source_is_skipped() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = ContentRegistry::new(vec![
            Box::new(Failing),
            Box::new(Counting { calls }),
        ]);

        let index = registry.build_index();
        check!(index.len() == 1);
        check!(index.entries()[0].variant == Variant::Pattern);
    }

    struct Panicking;

    impl ContentSource for Panicking {
        fn name(&self) -> &str {
            "panicking"
        }

        fn variant(&self) -> Variant {
            Variant::Tool
        }

        fn records(&self) -> Result<Vec<ContentItem>, SourceError> {
            panic!("collection accessor blew up")
        }
    }

    #[test]
    fn test_panicking_source_is_skipped() {
        let calls = Arc::new(AtomicUsize::new(0));
        let catalog = Catalog::new(ContentRegistry::new(vec![
            Box::new(Panicking),
            Box::new(Counting {
                calls: calls.clone(),
            }),
        ]));

        let results = catalog.search("observer", Filter::All);
        check!(results.len() == 1);
        check!(catalog.is_built());
        catalog.search("observer", Filter::All);
        check!(calls.load(Ordering::SeqCst) == 1);
    }

    #[test]
    fn test_empty_registry() {
        let catalog = Catalog::new(ContentRegistry::new(vec![]));
        check!(catalog.index().is_empty());
        check!(catalog.search("anything", Filter::All).is_empty());
    }

    #[test]
    fn test_list_variants_is_closed_set() {
        check!(Catalog::list_variants() == Variant::ALL);
    }
}
