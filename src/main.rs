use anyhow::Context;
use clap::Parser;
use devref_mcp::cli::{Cli, Commands};
use devref_mcp::search::Catalog;
use devref_mcp::tools::{ListVariantsRequest, handle_list_variants};
use devref_mcp::{CatalogServer, Filter};
use rmcp::{ServiceExt, transport::stdio};
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    devref_mcp::tracing::init(cli.log_format);

    let catalog = Catalog::global();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(catalog).await,
        Commands::Search {
            query,
            filter,
            limit,
            json,
        } => search(catalog, &query, &filter, limit, json),
        Commands::Variants => {
            print!(
                "{}",
                handle_list_variants(catalog, &ListVariantsRequest::default())
            );
            Ok(())
        }
    }
}

async fn serve(catalog: &'static Catalog) -> anyhow::Result<()> {
    tracing::info!("Starting devref-mcp MCP server");

    // Build the index before accepting requests so the first search is not slowed down
    let start = Instant::now();
    let entries = catalog.index().len();
    tracing::info!("Catalog ready: {} entries in {:?}", entries, start.elapsed());

    let server = CatalogServer::new(catalog);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}

fn search(
    catalog: &Catalog,
    query: &str,
    filter: &str,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let filter: Filter = filter.parse()?;
        let results: Vec<_> = catalog.search(query, filter).into_iter().take(limit).collect();
        let out = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    let request = devref_mcp::tools::SearchRequest {
        query: query.to_string(),
        filter: filter.to_string(),
        limit: Some(limit),
    };
    let output = devref_mcp::tools::handle_search(catalog, request).map_err(anyhow::Error::msg)?;
    print!("{}", output);
    Ok(())
}
