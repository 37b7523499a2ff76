//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `builtin`: the process-wide catalog over the embedded collections
//! - `fresh`: a new catalog over the embedded collections with its own index,
//!   for tests that need to observe index construction
//!
//! Hand-built sources ([`StaticSource`], [`FailingSource`]) let tests assemble
//! catalogs with exactly the records and failures they need.

use devref_mcp::error::SourceError;
use devref_mcp::{Catalog, ContentItem, ContentRegistry, ContentSource, Variant};
use rstest::fixture;

/// The process-wide catalog.
#[fixture]
pub fn builtin() -> &'static Catalog {
    Catalog::global()
}

/// A catalog over the embedded collections that shares nothing with other tests.
#[fixture]
pub fn fresh() -> Catalog {
    Catalog::new(ContentRegistry::builtin())
}

/// A source that returns a fixed list of records.
#[allow(dead_code)] // Used across different integration test crates
pub struct StaticSource {
    pub name: &'static str,
    pub variant: Variant,
    pub records: Vec<ContentItem>,
}

impl ContentSource for StaticSource {
    fn name(&self) -> &str {
        self.name
    }

    fn variant(&self) -> Variant {
        self.variant
    }

    fn records(&self) -> Result<Vec<ContentItem>, SourceError> {
        Ok(self.records.clone())
    }
}

/// A source whose accessor always fails.
#[allow(dead_code)] // Used across different integration test crates
pub struct FailingSource(pub Variant);

impl ContentSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn variant(&self) -> Variant {
        self.0
    }

    fn records(&self) -> Result<Vec<ContentItem>, SourceError> {
        Err(SourceError::Malformed {
            source_name: "failing".to_string(),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        })
    }
}

/// Every filter, including "all".
#[allow(dead_code)] // Used across different integration test crates
pub fn all_filters() -> Vec<devref_mcp::Filter> {
    std::iter::once(devref_mcp::Filter::All)
        .chain(Variant::ALL.into_iter().map(devref_mcp::Filter::Only))
        .collect()
}
