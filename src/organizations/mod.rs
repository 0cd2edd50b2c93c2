//! Organization queries

mod commands;
mod options;

pub use commands::{organizations_list, run_organizations_list};
pub use options::{OrganizationsListOptions, OrganizationsOutput};
