use super::{Variant, lenient};
use serde::{Deserialize, Serialize};

/// One record from a content family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", content = "record")]
pub enum ContentItem {
    #[serde(rename = "languages")]
    LanguageSnippet(Snippet),
    #[serde(rename = "topics")]
    Topic(Snippet),
    #[serde(rename = "tutorials")]
    Tutorial(Tutorial),
    #[serde(rename = "tools")]
    Tool(Tool),
    #[serde(rename = "hints")]
    Hint(Hint),
    #[serde(rename = "quicktips")]
    QuickTip(QuickTip),
    #[serde(rename = "certifications")]
    Certification(Certification),
    #[serde(rename = "patterns")]
    Pattern(Pattern),
    #[serde(rename = "platforms")]
    Platform(Platform),
    #[serde(rename = "howto")]
    HowToGuide(HowToGuide),
    #[serde(rename = "resources")]
    ResourceLink(ResourceLink),
}

impl ContentItem {
    pub const fn variant(&self) -> Variant {
        match self {
            Self::LanguageSnippet(_) => Variant::LanguageSnippet,
            Self::Topic(_) => Variant::Topic,
            Self::Tutorial(_) => Variant::Tutorial,
            Self::Tool(_) => Variant::Tool,
            Self::Hint(_) => Variant::Hint,
            Self::QuickTip(_) => Variant::QuickTip,
            Self::Certification(_) => Variant::Certification,
            Self::Pattern(_) => Variant::Pattern,
            Self::Platform(_) => Variant::Platform,
            Self::HowToGuide(_) => Variant::HowToGuide,
            Self::ResourceLink(_) => Variant::ResourceLink,
        }
    }

    /// Display title of the record.
    pub fn title(&self) -> &str {
        match self {
            Self::LanguageSnippet(s) | Self::Topic(s) => &s.title,
            Self::Tutorial(t) => &t.title,
            Self::Tool(t) => &t.name,
            Self::Hint(h) => &h.scenario,
            Self::QuickTip(t) => &t.title,
            Self::Certification(c) => &c.name,
            Self::Pattern(p) => &p.name,
            Self::Platform(p) => &p.name,
            Self::HowToGuide(g) => &g.title,
            Self::ResourceLink(l) => &l.name,
        }
    }

    /// The description-like body used for previews.
    pub fn summary(&self) -> &str {
        match self {
            Self::LanguageSnippet(s) | Self::Topic(s) => &s.description,
            Self::Tutorial(t) => &t.description,
            Self::Tool(t) => &t.description,
            Self::Hint(h) => &h.recommendation,
            Self::QuickTip(t) => &t.answer,
            Self::Certification(c) => &c.description,
            Self::Pattern(p) => &p.description,
            Self::Platform(p) => &p.description,
            Self::HowToGuide(g) => &g.description,
            Self::ResourceLink(l) => &l.description,
        }
    }
}

/// A code snippet inside a language reference or a specialized topic.
///
/// `owner_*` names the language (or topic), `category_*` the section within it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(skip_deserializing)]
    pub owner_id: String,
    #[serde(skip_deserializing)]
    pub owner_name: String,
    #[serde(skip_deserializing)]
    pub category_id: String,
    #[serde(skip_deserializing)]
    pub category_name: String,
    #[serde(skip_deserializing)]
    pub item_index: usize,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub usage: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub related_topics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    #[serde(skip_deserializing)]
    pub language_id: String,
    #[serde(skip_deserializing)]
    pub language_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub level: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub developer: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pricing: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub platforms: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub use_cases: Vec<String>,
}

/// A scenario with a recommended technology choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    #[serde(skip_deserializing)]
    pub category_id: String,
    #[serde(skip_deserializing)]
    pub category_title: String,
    #[serde(skip_deserializing)]
    pub item_index: usize,
    #[serde(default, deserialize_with = "lenient::text")]
    pub scenario: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub recommendation: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reason: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub when_to_use: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickTip {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub answer: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(skip_deserializing)]
    pub category_id: String,
    #[serde(skip_deserializing)]
    pub category_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub provider: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub level: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub free: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToGuide {
    #[serde(skip_deserializing)]
    pub category_id: String,
    #[serde(skip_deserializing)]
    pub category_name: String,
    #[serde(skip_deserializing)]
    pub item_index: usize,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub usage: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub estimated_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLink {
    #[serde(skip_deserializing)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}
