//! CLI argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "partsfinder")]
#[command(
    author,
    version,
    about = "Search DigiKey for electronic parts with LLM-refined filters"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one part search and print the final response JSON
    Search {
        /// Free-text part description
        query: String,
    },

    /// Start MCP server
    Mcp,
}
