//! MCP server exposing the catalog search.

use crate::schema::{inline_schema_for_type, search_request_schema};
use crate::search::Catalog;
use crate::tools::list_variants::{ListVariantsRequest, handle_list_variants};
use crate::tools::search::{SearchRequest, handle_search};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};

/// MCP Server for developer-reference catalog queries
#[derive(Clone)]
pub struct CatalogServer {
    /// Shared catalog; its index is built once and never rebuilt
    catalog: &'static Catalog,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for CatalogServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogServer")
            .field("catalog", &self.catalog)
            .finish()
    }
}

#[tool_router]
impl CatalogServer {
    /// Create a server over the given catalog.
    pub fn new(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            tool_router: Self::tool_router(),
        }
    }

    /// Get the catalog this server answers from.
    pub const fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    #[tool(
        description = "Search the developer-reference catalog (language snippets, topics, tutorials, tools, hints, quick tips, certifications, design patterns, platforms, how-to guides, resource links). Case-insensitive substring match; queries need at least 2 characters. Results keep catalog order.",
        input_schema = search_request_schema()
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(self.catalog, request)
    }

    #[tool(
        description = "List the available search filters (content families) with their entry counts.",
        input_schema = inline_schema_for_type::<ListVariantsRequest>()
    )]
    async fn list_variants(
        &self,
        Parameters(request): Parameters<ListVariantsRequest>,
    ) -> std::result::Result<String, String> {
        Ok(handle_list_variants(self.catalog, &request))
    }
}

#[tool_handler]
impl ServerHandler for CatalogServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "devref-mcp: A searchable developer-reference catalog. \
                 Use list_variants to see the content families, then search with an optional filter."
                    .to_string(),
            )
    }
}
