//! Organization CLI arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Organization subcommands
#[derive(Subcommand, Debug)]
pub enum OrganizationsAction {
    /// List organizations visible to the current session
    List(OrganizationsListArgs),
}

/// Arguments for 'organizations list'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        consolectl organizations list\n  \
        consolectl organizations list --search acme -o json\n  \
        consolectl organizations list --queries '{\"method\":\"limit\",\"values\":[5]}' --raw")]
pub struct OrganizationsListArgs {
    /// Query strings passed to the server as-is (repeatable, order kept)
    #[arg(long = "queries", value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Search term
    #[arg(long)]
    pub search: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Print the server payload unparsed (JSON unless -o yaml)
    #[arg(long, default_value_t = false)]
    pub raw: bool,
}
