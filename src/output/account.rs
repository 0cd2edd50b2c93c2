//! Account output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, format_timestamp, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::sdk::Account;

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Output the logged-in account in the specified format
pub fn output_account(account: &Account, format: &OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => output_table(account),
        OutputFormat::Csv => output_csv(account, no_header),
        OutputFormat::Json => print_json(account),
        OutputFormat::Yaml => print_yaml(account),
    }
}

fn output_table(account: &Account) {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.add_row(vec!["ID:", account.id.as_str()]);
    table.add_row(vec!["Name:", account.name.as_str()]);
    table.add_row(vec!["Email:", account.email.as_str()]);
    table.add_row(vec!["Verified:", yes_no(account.email_verification)]);
    table.add_row(vec!["MFA:", yes_no(account.mfa)]);
    let registered = format_timestamp(&account.registration);
    table.add_row(vec!["Registered:", registered.as_str()]);
    if !account.labels.is_empty() {
        let labels = account.labels.join(", ");
        table.add_row(vec!["Labels:", labels.as_str()]);
    }
    println!("{table}");
}

fn output_csv(account: &Account, no_header: bool) {
    if !no_header {
        println!("id,name,email,email_verification,mfa,registration");
    }
    println!(
        "{},{},{},{},{},{}",
        escape_csv(&account.id),
        escape_csv(&account.name),
        escape_csv(&account.email),
        account.email_verification,
        account.mfa,
        escape_csv(&account.registration)
    );
}
