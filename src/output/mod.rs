//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod account;
mod client;
mod common;
mod organizations;

pub use account::output_account;
pub use client::{mask_secret, output_client_config};
pub use common::{escape_csv, format_timestamp, output_raw, print_json, print_yaml};
pub use organizations::output_organizations;
