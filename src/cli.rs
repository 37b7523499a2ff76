use crate::tracing::LogFormat;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "devref-mcp")]
#[command(about = "Search a developer-reference catalog, over MCP or from the shell", long_about = None)]
pub struct Cli {
    /// Log line format written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the catalog over MCP on stdio (default)
    Serve,
    /// Run one search and print the results
    Search {
        query: String,
        /// Content family to search, or "all"
        #[arg(short, long, default_value = "all")]
        filter: String,
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
        /// Print result descriptors as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available filters with entry counts
    Variants,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["devref-mcp"]).unwrap();
        check!(cli.command.is_none());
        check!(cli.log_format == LogFormat::Compact);
    }

    #[test]
    fn test_search_arguments() {
        let cli =
            Cli::try_parse_from(["devref-mcp", "search", "docker", "-f", "tools", "--json"])
                .unwrap();
        let_assert!(
            Some(Commands::Search {
                query,
                filter,
                limit,
                json,
            }) = cli.command
        );
        check!(query == "docker");
        check!(filter == "tools");
        check!(limit == 20);
        check!(json);
    }

    #[test]
    fn test_json_log_format() {
        let cli = Cli::try_parse_from(["devref-mcp", "variants", "--log-format", "json"]).unwrap();
        check!(cli.log_format == LogFormat::Json);
    }
}
