//! Query matching against the search index.

use super::index::{IndexedEntry, SearchIndex};
use super::normalize::collapse_whitespace;
use crate::content::Filter;

/// Queries shorter than this (in characters, after trimming) match nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// A single search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub filter: Filter,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, filter: Filter) -> Self {
        Self {
            text: text.into(),
            filter,
        }
    }

    /// The lowercased, whitespace-collapsed text to look for, or `None` when
    /// the query is too short to run.
    ///
    /// Indexed text has its whitespace runs collapsed, so the needle is too.
    pub fn needle(&self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return None;
        }
        Some(collapse_whitespace(trimmed).to_lowercase())
    }

    /// Whether the query is below the minimum length and will match nothing.
    pub fn is_gated(&self) -> bool {
        self.needle().is_none()
    }
}

/// Entries matching `query`, in index order.
///
/// The index is narrowed to the query's filter first, then each remaining
/// entry is kept if its searchable text contains the lowercased query.
pub fn search<'a>(query: &SearchQuery, index: &'a SearchIndex) -> Vec<&'a IndexedEntry> {
    let Some(needle) = query.needle() else {
        return vec![];
    };

    index
        .scoped(query.filter)
        .filter(|entry| entry.searchable_text.contains(needle.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentItem, Pattern, Platform, Variant};
    use assert2::check;
    use rstest::{fixture, rstest};

    #[fixture]
    fn index() -> SearchIndex {
        [
            ContentItem::Pattern(Pattern {
                name: "Singleton Pattern".into(),
                category: "Creational".into(),
                ..Pattern::default()
            }),
            ContentItem::Platform(Platform {
                name: "Docker".into(),
                category: "Containerization".into(),
                ..Platform::default()
            }),
            ContentItem::Pattern(Pattern {
                name: "Factory Pattern".into(),
                category: "Creational".into(),
                ..Pattern::default()
            }),
        ]
        .into_iter()
        .collect()
    }

    fn titles(results: &[&IndexedEntry]) -> Vec<String> {
        results
            .iter()
            .map(|entry| entry.item.title().to_string())
            .collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("p")]
    #[case("  p  ")]
    #[case("é")]
    fn test_short_queries_are_gated(index: SearchIndex, #[case] text: &str) {
        for filter in [Filter::All, Filter::Only(Variant::Pattern)] {
            let query = SearchQuery::new(text, filter);
            check!(query.is_gated());
            check!(search(&query, &index).is_empty());
        }
    }

    #[rstest]
    fn test_two_characters_is_enough(index: SearchIndex) {
        let results = search(&SearchQuery::new("do", Filter::All), &index);
        check!(titles(&results) == ["Docker"]);
    }

    #[rstest]
    fn test_case_insensitive(index: SearchIndex) {
        let lower = search(&SearchQuery::new("creational", Filter::All), &index);
        let upper = search(&SearchQuery::new("  CREATIONAL ", Filter::All), &index);
        check!(lower == upper);
        check!(titles(&lower) == ["Singleton Pattern", "Factory Pattern"]);
    }

    #[rstest]
    fn test_filter_scopes_before_matching(index: SearchIndex) {
        let results = search(
            &SearchQuery::new("docker", Filter::Only(Variant::Pattern)),
            &index,
        );
        check!(results.is_empty());

        let results = search(
            &SearchQuery::new("pattern", Filter::Only(Variant::Pattern)),
            &index,
        );
        check!(results.iter().all(|entry| entry.variant == Variant::Pattern));
        check!(results.len() == 2);
    }

    #[rstest]
    fn test_substring_not_tokens(index: SearchIndex) {
        let results = search(&SearchQuery::new("gleton pat", Filter::All), &index);
        check!(titles(&results) == ["Singleton Pattern"]);
    }

    #[test]
    fn test_inner_whitespace_runs_match_collapsed_text() {
        let index: SearchIndex = [ContentItem::Pattern(Pattern {
            name: "Foo  Bar".into(),
            ..Pattern::default()
        })]
        .into_iter()
        .collect();

        for text in ["Foo  Bar", "foo bar", " FOO \t\n BAR "] {
            let results = search(&SearchQuery::new(text, Filter::All), &index);
            check!(titles(&results) == ["Foo  Bar"], "{text:?} missed");
        }
    }

    #[rstest]
    fn test_preserves_index_order(index: SearchIndex) {
        let results = search(&SearchQuery::new("er", Filter::All), &index);
        check!(titles(&results) == ["Singleton Pattern", "Docker", "Factory Pattern"]);
    }
}
