//! Organization command handlers

use log::debug;

use crate::cli::{Cli, OrganizationsListArgs};
use crate::error::Result;
use crate::output::{output_organizations, output_raw};
use crate::sdk::{self, OrganizationList};
use crate::ui::{create_spinner, finish_spinner};

use super::options::{OrganizationsListOptions, OrganizationsOutput};

/// List organizations through the given client or the process-wide default.
///
/// With `console` set the result is printed and `None` is returned.
pub async fn organizations_list(
    options: &OrganizationsListOptions<'_>,
) -> Result<Option<OrganizationsOutput>> {
    debug!(
        "Listing organizations: queries={:?} search={:?}",
        options.queries, options.search
    );

    let raw = match options.sdk {
        Some(sdk) => {
            sdk.list_organizations(&options.queries, options.search.as_deref())
                .await?
        }
        None => {
            let client = sdk::default_client()?;
            client
                .list_organizations(&options.queries, options.search.as_deref())
                .await?
        }
    };

    let result = if options.parse_output {
        OrganizationsOutput::Parsed(OrganizationList::from_raw(&raw)?)
    } else {
        OrganizationsOutput::Raw(raw)
    };

    if !options.console {
        return Ok(Some(result));
    }

    match &result {
        OrganizationsOutput::Parsed(list) => {
            output_organizations(list, &options.output, options.no_header)
        }
        OrganizationsOutput::Raw(raw) => output_raw(raw, &options.output),
    }
    Ok(None)
}

/// Run the organizations list command
pub async fn run_organizations_list(
    cli: &Cli,
    args: &OrganizationsListArgs,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Fetching organizations...", cli.batch);

    let options = OrganizationsListOptions {
        queries: args.queries.clone(),
        search: args.search.clone(),
        parse_output: !args.raw,
        output: args.output,
        no_header: cli.no_header,
        ..Default::default()
    };
    let result = organizations_list(&options).await;
    finish_spinner(spinner);

    match result? {
        Some(OrganizationsOutput::Parsed(list)) => {
            output_organizations(&list, &args.output, cli.no_header)
        }
        Some(OrganizationsOutput::Raw(raw)) => output_raw(&raw, &args.output),
        None => {}
    }
    Ok(())
}
