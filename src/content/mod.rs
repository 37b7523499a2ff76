//! Content families and the records they produce.
//!
//! Every record in the catalog is a [`ContentItem`], a closed union tagged by
//! [`Variant`]. Consumers match on the item instead of probing for fields.

mod item;
pub(crate) mod lenient;

pub use item::{
    Certification, ContentItem, Hint, HowToGuide, Pattern, Platform, QuickTip, ResourceLink,
    Snippet, Tool, Tutorial,
};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The content family an entry belongs to.
///
/// The set is closed; registry order follows [`Variant::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Variant {
    #[serde(rename = "languages")]
    LanguageSnippet,
    #[serde(rename = "topics")]
    Topic,
    #[serde(rename = "tutorials")]
    Tutorial,
    #[serde(rename = "tools")]
    Tool,
    #[serde(rename = "hints")]
    Hint,
    #[serde(rename = "quicktips")]
    QuickTip,
    #[serde(rename = "certifications")]
    Certification,
    #[serde(rename = "patterns")]
    Pattern,
    #[serde(rename = "platforms")]
    Platform,
    #[serde(rename = "howto")]
    HowToGuide,
    #[serde(rename = "resources")]
    ResourceLink,
}

impl Variant {
    /// All variants, in the order their collections are concatenated into the index.
    pub const ALL: [Self; 11] = [
        Self::LanguageSnippet,
        Self::Topic,
        Self::Tutorial,
        Self::Tool,
        Self::Hint,
        Self::QuickTip,
        Self::Certification,
        Self::Pattern,
        Self::Platform,
        Self::HowToGuide,
        Self::ResourceLink,
    ];

    /// Stable identifier used by filter controls and the `filter` argument.
    pub const fn filter_id(self) -> &'static str {
        match self {
            Self::LanguageSnippet => "languages",
            Self::Topic => "topics",
            Self::Tutorial => "tutorials",
            Self::Tool => "tools",
            Self::Hint => "hints",
            Self::QuickTip => "quicktips",
            Self::Certification => "certifications",
            Self::Pattern => "patterns",
            Self::Platform => "platforms",
            Self::HowToGuide => "howto",
            Self::ResourceLink => "resources",
        }
    }

    /// Human-readable name, also the fallback category label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LanguageSnippet => "Language Snippet",
            Self::Topic => "Topic",
            Self::Tutorial => "Tutorial",
            Self::Tool => "Tool",
            Self::Hint => "Hint",
            Self::QuickTip => "Quick Tip",
            Self::Certification => "Certification",
            Self::Pattern => "Design Pattern",
            Self::Platform => "Platform",
            Self::HowToGuide => "How-To Guide",
            Self::ResourceLink => "Resource Link",
        }
    }

    /// Short badge shown in front of a result.
    pub const fn badge(self) -> &'static str {
        match self {
            Self::LanguageSnippet => "CODE",
            Self::Topic => "TOPIC",
            Self::Tutorial => "TUTORIAL",
            Self::Tool => "TOOL",
            Self::Hint => "HINT",
            Self::QuickTip => "TIP",
            Self::Certification => "CERT",
            Self::Pattern => "PATTERN",
            Self::Platform => "PLATFORM",
            Self::HowToGuide => "HOW-TO",
            Self::ResourceLink => "LINK",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scope of a search: the whole catalog or a single family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Variant),
}

impl Filter {
    /// Whether entries of `variant` are inside this scope.
    pub fn admits(self, variant: Variant) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == variant,
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(variant) => variant.filter_id(),
        }
    }
}

impl From<Variant> for Filter {
    fn from(variant: Variant) -> Self {
        Self::Only(variant)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Filter {
    type Err = crate::error::FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(Self::All);
        }
        Variant::ALL
            .into_iter()
            .find(|variant| variant.filter_id() == wanted)
            .map(Self::Only)
            .ok_or_else(|| crate::error::FilterParseError {
                input: s.to_string(),
            })
    }
}
