//! Content collections feeding the catalog.
//!
//! Each collection is a [`ContentSource`]: a zero-argument accessor returning one
//! family's records in declared order. The built-in collections are JSON
//! documents compiled into the binary.

mod documents;

use crate::content::{ContentItem, Variant};
use crate::error::SourceError;

/// A provider of one content family's records.
pub trait ContentSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// The family every returned record belongs to.
    fn variant(&self) -> Variant;

    /// All records of this family, in declared order.
    fn records(&self) -> Result<Vec<ContentItem>, SourceError>;
}

/// A collection backed by a JSON document embedded at compile time.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedSource {
    name: &'static str,
    variant: Variant,
    document: &'static str,
}

impl EmbeddedSource {
    pub const fn new(name: &'static str, variant: Variant, document: &'static str) -> Self {
        Self {
            name,
            variant,
            document,
        }
    }
}

impl ContentSource for EmbeddedSource {
    fn name(&self) -> &str {
        self.name
    }

    fn variant(&self) -> Variant {
        self.variant
    }

    fn records(&self) -> Result<Vec<ContentItem>, SourceError> {
        documents::parse(self.variant, self.document).map_err(|source| SourceError::Malformed {
            source_name: self.name.to_string(),
            source,
        })
    }
}

/// The collections shipped with the catalog, one per variant, in registry order.
pub fn builtin() -> Vec<Box<dyn ContentSource>> {
    vec![
        embedded("languages", Variant::LanguageSnippet, include_str!("../../data/languages.json")),
        embedded("topics", Variant::Topic, include_str!("../../data/topics.json")),
        embedded("tutorials", Variant::Tutorial, include_str!("../../data/tutorials.json")),
        embedded("tools", Variant::Tool, include_str!("../../data/tools.json")),
        embedded("hints", Variant::Hint, include_str!("../../data/hints.json")),
        embedded("quicktips", Variant::QuickTip, include_str!("../../data/quicktips.json")),
        embedded(
            "certifications",
            Variant::Certification,
            include_str!("../../data/certifications.json"),
        ),
        embedded("patterns", Variant::Pattern, include_str!("../../data/patterns.json")),
        embedded("platforms", Variant::Platform, include_str!("../../data/platforms.json")),
        embedded("howto", Variant::HowToGuide, include_str!("../../data/howto.json")),
        embedded("resources", Variant::ResourceLink, include_str!("../../data/resources.json")),
    ]
}

fn embedded(
    name: &'static str,
    variant: Variant,
    document: &'static str,
) -> Box<dyn ContentSource> {
    Box::new(EmbeddedSource::new(name, variant, document))
}
