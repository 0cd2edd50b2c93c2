//! Organization output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, format_timestamp, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::sdk::{Organization, OrganizationList};

/// Serializable organization for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableOrganization<'a> {
    id: &'a str,
    name: &'a str,
    members: u64,
    created_at: &'a str,
    updated_at: &'a str,
}

impl<'a> From<&'a Organization> for SerializableOrganization<'a> {
    fn from(org: &'a Organization) -> Self {
        Self {
            id: &org.id,
            name: &org.name,
            members: org.total,
            created_at: &org.created_at,
            updated_at: &org.updated_at,
        }
    }
}

/// Output organizations in the specified format
pub fn output_organizations(list: &OrganizationList, format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => output_table(list, no_header),
        OutputFormat::Csv => output_csv(&list.organizations, no_header),
        OutputFormat::Json => output_json(&list.organizations),
        OutputFormat::Yaml => output_yaml(&list.organizations),
    }
}

fn output_table(list: &OrganizationList, no_header: bool) {
    if list.organizations.is_empty() {
        println!("No organizations found");
        return;
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "Name", "Members", "Created At"]);
    }

    for org in &list.organizations {
        table.add_row(vec![
            org.id.clone(),
            org.name.clone(),
            org.total.to_string(),
            format_timestamp(&org.created_at),
        ]);
    }

    println!();
    println!("{table}");
    if !no_header {
        println!(
            "\nShowing {} of {} organizations",
            list.organizations.len(),
            list.total
        );
    }
}

fn output_csv(orgs: &[Organization], no_header: bool) {
    if !no_header {
        println!("id,name,members,created_at,updated_at");
    }
    for org in orgs {
        println!(
            "{},{},{},{},{}",
            escape_csv(&org.id),
            escape_csv(&org.name),
            org.total,
            escape_csv(&org.created_at),
            escape_csv(&org.updated_at)
        );
    }
}

fn output_json(orgs: &[Organization]) {
    let data: Vec<SerializableOrganization> = orgs.iter().map(|o| o.into()).collect();
    print_json(&data);
}

fn output_yaml(orgs: &[Organization]) {
    let data: Vec<SerializableOrganization> = orgs.iter().map(|o| o.into()).collect();
    print_yaml(&data);
}
