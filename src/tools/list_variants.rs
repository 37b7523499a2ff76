use crate::search::Catalog;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Parameters for list_variants tool
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListVariantsRequest {
    /// Hide content families that currently have no entries
    #[serde(default)]
    pub non_empty_only: bool,
}

/// List the selectable search filters with their entry counts.
pub fn handle_list_variants(catalog: &Catalog, request: &ListVariantsRequest) -> String {
    let counts = catalog.variant_counts();
    let total: usize = counts.iter().map(|(_, count)| count).sum();

    let mut output = format!("Filters ({} entries total):\n", total);
    let _ = writeln!(output, "  • all - every content family ({})", total);

    for (variant, count) in counts {
        if request.non_empty_only && count == 0 {
            continue;
        }
        let _ = writeln!(
            output,
            "  • {} - {} ({})",
            variant.filter_id(),
            variant.label(),
            count
        );
    }

    output
}
