//! Catalog search handler.

use crate::content::Filter;
use crate::search::{Catalog, ResultDescriptor, SearchQuery, present, summarize};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query; matched case-insensitively as a substring
    pub query: String,
    /// Content family to search, or "all" (default: all)
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Maximum number of results to return (default: 20)
    #[serde(default = "default_limit")]
    pub limit: Option<usize>,
}

fn default_filter() -> String {
    "all".to_string()
}

fn default_limit() -> Option<usize> {
    Some(20)
}

/// Run a catalog search and format the results as text.
pub fn handle_search(catalog: &Catalog, request: SearchRequest) -> Result<String, String> {
    let filter: Filter = request.filter.parse().map_err(|e| format!("{}", e))?;
    let query = SearchQuery::new(request.query, filter);

    if query.is_gated() {
        return Ok(format!(
            "Query '{}' is too short. Type at least 2 characters to search.",
            query.text.trim()
        ));
    }

    let results: Vec<ResultDescriptor> = catalog.matches(&query).into_iter().map(present).collect();
    tracing::debug!(
        "Search '{}' in {} matched {} entries",
        query.text.trim(),
        filter,
        results.len()
    );

    if results.is_empty() {
        return Ok(format_no_results(query.text.trim(), filter));
    }

    Ok(format_search_results(
        &results,
        query.text.trim(),
        filter,
        request.limit.unwrap_or(20),
    ))
}

/// Format search results into a readable string output.
fn format_search_results(
    results: &[ResultDescriptor],
    query: &str,
    filter: Filter,
    limit: usize,
) -> String {
    let mut output = format!(
        "Search results for '{}' in '{}': {}\n\n",
        query,
        filter,
        summarize(results.len())
    );

    for (idx, result) in results.iter().take(limit).enumerate() {
        let _ = write!(output, "{}. [{}] {}", idx + 1, result.badge, result.title);
        if !result.subtitle.is_empty() {
            let _ = write!(output, " ({})", result.subtitle);
        }
        let _ = writeln!(output, " - {}", result.category_label);

        if !result.preview.is_empty() {
            let _ = writeln!(output, "   {}", result.preview);
        }
        if let Ok(target) = serde_json::to_string(&result.navigation_target) {
            let _ = writeln!(output, "   -> {}", target);
        }
        output.push('\n');
    }

    if results.len() > limit {
        let _ = writeln!(output, "... and {} more", results.len() - limit);
    }

    output
}

fn format_no_results(query: &str, filter: Filter) -> String {
    let mut msg = format!("No results found for '{}' in '{}'.\n\n", query, filter);

    msg.push_str("Search tips:\n");
    msg.push_str("• Try different keywords or check your filter\n");
    msg.push_str("• Try: \"async\", \"database\", \"docker\"\n");
    msg.push_str("• Try: \"singleton\", \"api\", \"cloud\"\n");

    if filter != Filter::All {
        msg.push_str("• Use filter \"all\" to search every content family\n");
    }

    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentItem, Tool, Variant};
    use crate::error::SourceError;
    use crate::search::ContentRegistry;
    use crate::sources::ContentSource;
    use assert2::check;
    use rstest::{fixture, rstest};

    struct Tools;

    impl ContentSource for Tools {
        fn name(&self) -> &str {
            "tools"
        }

        fn variant(&self) -> Variant {
            Variant::Tool
        }

        fn records(&self) -> Result<Vec<ContentItem>, SourceError> {
            Ok(["Docker", "Docker Compose", "Dockerfile Linter"]
                .into_iter()
                .map(|name| {
                    ContentItem::Tool(Tool {
                        id: name.to_lowercase(),
                        name: name.into(),
                        category: "DevOps".into(),
                        ..Tool::default()
                    })
                })
                .collect())
        }
    }

    #[fixture]
    fn catalog() -> Catalog {
        Catalog::new(ContentRegistry::new(vec![Box::new(Tools)]))
    }

    fn request(query: &str, filter: &str, limit: Option<usize>) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            filter: filter.to_string(),
            limit,
        }
    }

    #[rstest]
    fn test_search_lists_results(catalog: Catalog) {
        let output = handle_search(&catalog, request("docker", "tools", None)).unwrap();
        check!(output.contains("3 results found"));
        check!(output.contains("1. [TOOL] Docker - DevOps"));
        check!(output.contains("\"screen\":\"ToolDetail\""));
    }

    #[rstest]
    fn test_search_respects_limit(catalog: Catalog) {
        let output = handle_search(&catalog, request("docker", "all", Some(1))).unwrap();
        check!(output.contains("1. [TOOL] Docker"));
        check!(!output.contains("2. "));
        check!(output.contains("... and 2 more"));
    }

    #[rstest]
    fn test_search_gated_query(catalog: Catalog) {
        let output = handle_search(&catalog, request(" d ", "all", None)).unwrap();
        check!(output.contains("at least 2 characters"));
    }

    #[rstest]
    fn test_search_no_results_gives_tips(catalog: Catalog) {
        let output = handle_search(&catalog, request("docker", "patterns", None)).unwrap();
        check!(output.contains("No results found"));
        check!(output.contains("\"docker\""));
        check!(output.contains("Use filter \"all\""));
    }

    #[rstest]
    fn test_search_rejects_unknown_filter(catalog: Catalog) {
        let err = handle_search(&catalog, request("docker", "gadgets", None)).unwrap_err();
        check!(err.contains("Unknown filter 'gadgets'"));
    }

    #[test]
    fn test_request_defaults() {
        let request: SearchRequest = serde_json::from_str(r#"{"query": "rust"}"#).unwrap();
        check!(request.filter == "all");
        check!(request.limit == Some(20));
    }
}
