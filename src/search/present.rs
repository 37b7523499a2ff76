//! Turning matched entries into display-ready result descriptors.

use super::index::{IndexedEntry, NavigationTarget};
use super::normalize::collapse_whitespace;
use crate::content::{ContentItem, Variant};
use serde::Serialize;

/// Maximum preview length in characters, excluding the ellipsis.
pub const PREVIEW_CHARS: usize = 120;

/// Everything the presentation layer needs to render one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultDescriptor {
    pub variant: Variant,
    pub badge: &'static str,
    pub title: String,
    /// Secondary header line such as the owning language or provider. Empty when the record has none.
    pub subtitle: String,
    pub preview: String,
    pub category_label: String,
    pub navigation_target: NavigationTarget,
}

/// Project a matched entry into a [`ResultDescriptor`].
pub fn present(entry: &IndexedEntry) -> ResultDescriptor {
    debug_assert_eq!(
        entry.variant,
        entry.item.variant(),
        "indexed entry variant disagrees with its payload"
    );

    ResultDescriptor {
        variant: entry.variant,
        badge: entry.variant.badge(),
        title: entry.item.title().trim().to_string(),
        subtitle: subtitle(&entry.item).trim().to_string(),
        preview: preview(entry.item.summary()),
        category_label: entry.category_label.clone(),
        navigation_target: entry.navigation_target.clone(),
    }
}

fn subtitle(item: &ContentItem) -> &str {
    match item {
        ContentItem::LanguageSnippet(s) | ContentItem::Topic(s) => &s.owner_name,
        ContentItem::Tutorial(t) => &t.language_name,
        ContentItem::Tool(t) => &t.developer,
        ContentItem::Certification(c) => &c.provider,
        ContentItem::HowToGuide(g) => &g.estimated_time,
        ContentItem::ResourceLink(l) => &l.url,
        ContentItem::Hint(_)
        | ContentItem::QuickTip(_)
        | ContentItem::Pattern(_)
        | ContentItem::Platform(_) => "",
    }
}

/// Whitespace-collapsed `text`, cut to [`PREVIEW_CHARS`] on a char boundary.
pub fn preview(text: &str) -> String {
    let text = collapse_whitespace(text);
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text,
    }
}

/// Human-readable result count line.
pub fn summarize(count: usize) -> String {
    format!(
        "{} result{} found",
        count,
        if count == 1 { "" } else { "s" }
    )
}
