//! CLI module for the knowledge search tools
//!
//! Every subcommand runs against the in-memory host seeded from the
//! configured catalog:
//! - `search`: run `search_knowledge`
//! - `list`: run `list_available_knowledge_bases`
//! - `specs`: print the function-calling specs
//! - `call`: dispatch a raw tool call
//!
//! Tool results go to stdout; progress events are printed to stderr as JSON
//! lines.

pub mod call;
pub mod host;
pub mod list;
pub mod search;
pub mod specs;

use clap::{Parser, Subcommand};

/// Knowledge search tools - search and list organizational knowledge bases
#[derive(Parser)]
#[command(name = "kb-search-tools")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog file seeding the in-memory host (overrides config)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search knowledge bases
    Search(search::SearchArgs),

    /// List knowledge bases visible to a user
    List(list::ListArgs),

    /// Print tool specs as JSON
    Specs,

    /// Invoke a tool by name with JSON arguments
    Call(call::CallArgs),
}
