//! Error types for catalog loading and query parsing.

use crate::content::Variant;
use thiserror::Error;

/// Error returned when a content source cannot produce its records.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source document is not valid JSON or has the wrong top-level shape.
    #[error("Malformed content document '{source_name}': {source}")]
    Malformed {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned when a filter id names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter '{input}'. Valid filters: all, {}", valid_filters())]
pub struct FilterParseError {
    pub input: String,
}

fn valid_filters() -> String {
    Variant::ALL
        .iter()
        .map(|variant| variant.filter_id())
        .collect::<Vec<_>>()
        .join(", ")
}
