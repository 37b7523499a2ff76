//! Indexed entries and the immutable search index.

use super::normalize::searchable_text;
use crate::content::{ContentItem, Filter, Variant};
use serde::Serialize;

/// Where the presentation layer should go when a result is opened.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "screen", rename_all_fields = "camelCase")]
pub enum NavigationTarget {
    CodeDetail {
        language_id: String,
        category_id: String,
        item_index: usize,
    },
    TopicDetail {
        topic_id: String,
        category_id: String,
        item_index: usize,
    },
    TutorialDetail {
        language_id: String,
        tutorial_id: String,
    },
    ToolDetail {
        tool_id: String,
    },
    Hints {
        category_id: String,
        item_index: usize,
    },
    QuickTips {
        tip_id: String,
    },
    CertificationDetail {
        category_id: String,
        certification_id: String,
    },
    PatternDetail {
        pattern_id: String,
    },
    PlatformDetail {
        platform_id: String,
    },
    HowToDetail {
        category_id: String,
        item_index: usize,
    },
    External {
        url: String,
    },
}

impl NavigationTarget {
    pub fn for_item(item: &ContentItem) -> Self {
        match item {
            ContentItem::LanguageSnippet(s) => Self::CodeDetail {
                language_id: s.owner_id.clone(),
                category_id: s.category_id.clone(),
                item_index: s.item_index,
            },
            ContentItem::Topic(s) => Self::TopicDetail {
                topic_id: s.owner_id.clone(),
                category_id: s.category_id.clone(),
                item_index: s.item_index,
            },
            ContentItem::Tutorial(t) => Self::TutorialDetail {
                language_id: t.language_id.clone(),
                tutorial_id: t.id.clone(),
            },
            ContentItem::Tool(t) => Self::ToolDetail {
                tool_id: t.id.clone(),
            },
            ContentItem::Hint(h) => Self::Hints {
                category_id: h.category_id.clone(),
                item_index: h.item_index,
            },
            ContentItem::QuickTip(t) => Self::QuickTips {
                tip_id: t.id.clone(),
            },
            ContentItem::Certification(c) => Self::CertificationDetail {
                category_id: c.category_id.clone(),
                certification_id: c.id.clone(),
            },
            ContentItem::Pattern(p) => Self::PatternDetail {
                pattern_id: p.id.clone(),
            },
            ContentItem::Platform(p) => Self::PlatformDetail {
                platform_id: p.id.clone(),
            },
            ContentItem::HowToGuide(g) => Self::HowToDetail {
                category_id: g.category_id.clone(),
                item_index: g.item_index,
            },
            ContentItem::ResourceLink(l) => Self::External { url: l.url.clone() },
        }
    }
}

/// Grouping shown next to a result. Never empty: falls back to the variant label.
pub fn category_label(item: &ContentItem) -> String {
    let category = match item {
        ContentItem::LanguageSnippet(s) | ContentItem::Topic(s) => &s.category_name,
        ContentItem::Tutorial(t) => &t.level,
        ContentItem::Tool(t) => &t.category,
        ContentItem::Hint(h) => &h.category_title,
        ContentItem::QuickTip(t) => &t.category,
        ContentItem::Certification(c) => &c.category_name,
        ContentItem::Pattern(p) => &p.category,
        ContentItem::Platform(p) => &p.category,
        ContentItem::HowToGuide(g) => &g.category_name,
        ContentItem::ResourceLink(l) => &l.category,
    };

    let category = category.trim();
    if category.is_empty() {
        item.variant().label().to_string()
    } else {
        category.to_string()
    }
}

/// A content item with everything search needs precomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedEntry {
    pub variant: Variant,
    pub item: ContentItem,
    pub searchable_text: String,
    pub category_label: String,
    pub navigation_target: NavigationTarget,
}

impl IndexedEntry {
    pub fn new(item: ContentItem) -> Self {
        Self {
            variant: item.variant(),
            searchable_text: searchable_text(&item),
            category_label: category_label(&item),
            navigation_target: NavigationTarget::for_item(&item),
            item,
        }
    }
}

/// The ordered, immutable collection of every indexed entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchIndex {
    entries: Vec<IndexedEntry>,
}

impl SearchIndex {
    pub(super) const fn new(entries: Vec<IndexedEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries admitted by `filter`, in index order.
    pub fn scoped(&self, filter: Filter) -> impl Iterator<Item = &IndexedEntry> {
        self.entries
            .iter()
            .filter(move |entry| filter.admits(entry.variant))
    }

    /// Number of entries per variant, in `Variant::ALL` order.
    pub fn variant_counts(&self) -> Vec<(Variant, usize)> {
        Variant::ALL
            .into_iter()
            .map(|variant| (variant, self.scoped(Filter::Only(variant)).count()))
            .collect()
    }
}

impl FromIterator<ContentItem> for SearchIndex {
    fn from_iter<I: IntoIterator<Item = ContentItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(IndexedEntry::new).collect())
    }
}
