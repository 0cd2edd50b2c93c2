//! Option record for `organizations_list`

use crate::cli::OutputFormat;
use crate::sdk::{ConsoleSdk, OrganizationList};

/// Options for `organizations_list`
pub struct OrganizationsListOptions<'a> {
    /// Query strings, forwarded verbatim and in order
    pub queries: Vec<String>,
    pub search: Option<String>,
    /// Return the transformed `OrganizationList` instead of the raw payload
    pub parse_output: bool,
    /// Client to use instead of the process-wide default
    pub sdk: Option<&'a dyn ConsoleSdk>,
    /// Render the result on stdout and return nothing
    pub console: bool,
    /// Format used when `console` is set
    pub output: OutputFormat,
    pub no_header: bool,
}

impl Default for OrganizationsListOptions<'_> {
    fn default() -> Self {
        Self {
            queries: Vec::new(),
            search: None,
            parse_output: false,
            sdk: None,
            console: false,
            output: OutputFormat::Table,
            no_header: false,
        }
    }
}

/// What `organizations_list` hands back when not rendering
#[derive(Debug, Clone, PartialEq)]
pub enum OrganizationsOutput {
    /// Payload exactly as the server returned it
    Raw(serde_json::Value),
    Parsed(OrganizationList),
}
