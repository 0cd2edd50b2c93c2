//! Auth command handlers

use log::debug;

use crate::cli::{ClientArgs, Cli, LoginArgs, RegisterArgs, WhoamiArgs};
use crate::output::{output_account, output_client_config};
use crate::sdk::ConsoleSdk;
use crate::store::ConfigStore;
use crate::ui::{create_spinner, finish_spinner, BatchPrompter, InteractivePrompter, Prompter};

use super::dispatch;
use super::options::{ClientOptions, LoginOptions, RegisterOptions};

type CommandResult = std::result::Result<(), Box<dyn std::error::Error>>;

fn prompter(cli: &Cli) -> Box<dyn Prompter> {
    if cli.batch {
        Box::new(BatchPrompter)
    } else {
        Box::new(InteractivePrompter)
    }
}

/// Run the login command
pub async fn run_login_command(
    sdk: &dyn ConsoleSdk,
    store: &ConfigStore,
    cli: &Cli,
    args: &LoginArgs,
) -> CommandResult {
    let options = LoginOptions::from(args);
    debug!(
        "Login: email={:?} endpoint={:?} mfa={}",
        options.email,
        options.endpoint,
        options.mfa_token.is_some()
    );

    dispatch::login(sdk, store, &options, prompter(cli).as_ref()).await?;

    let config = store.load()?;
    match config.current_session().and_then(|s| s.email.as_deref()) {
        Some(email) => println!("✓ Logged in as {}", email),
        None => println!("✓ Logged in"),
    }
    Ok(())
}

/// Run the register command
pub async fn run_register_command(
    sdk: &dyn ConsoleSdk,
    cli: &Cli,
    args: &RegisterArgs,
) -> CommandResult {
    let mut options = RegisterOptions::from(args);
    options.prompt_missing(prompter(cli).as_ref())?;

    let account = dispatch::register(sdk, &options).await?;
    println!("✓ Registered {}", account.email);
    output_account(&account, &args.output, cli.no_header);
    Ok(())
}

/// Run the logout command
pub async fn run_logout_command(sdk: &dyn ConsoleSdk, store: &ConfigStore) -> CommandResult {
    let was_logged_in = store.load()?.current.is_some();
    dispatch::logout(sdk, store).await?;
    if was_logged_in {
        println!("✓ Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

/// Run the whoami command
pub async fn run_whoami_command(
    sdk: &dyn ConsoleSdk,
    store: &ConfigStore,
    cli: &Cli,
    args: &WhoamiArgs,
) -> CommandResult {
    let spinner = create_spinner("Fetching account...", cli.batch);
    let result = dispatch::whoami(sdk, store).await;
    finish_spinner(spinner);

    output_account(&result?, &args.output, cli.no_header);
    Ok(())
}

/// Run the client command
pub fn run_client_command(store: &ConfigStore, args: &ClientArgs) -> CommandResult {
    let options = ClientOptions::from(args);
    let client = dispatch::client(store, &options)?;

    if options.has_changes() {
        println!("✓ Client configured for {}", client.endpoint());
    }
    if options.debug {
        output_client_config(&store.load()?, store.path());
    } else if !options.has_changes() {
        println!("Endpoint: {}", client.endpoint());
    }
    Ok(())
}

/// Run the migrate command
pub fn run_migrate_command(store: &ConfigStore) -> CommandResult {
    let needed = store.exists() && store.load()?.needs_migration();
    dispatch::migrate(store)?;
    if needed {
        println!("✓ Migrated {}", store.path().display());
    } else {
        println!("Nothing to migrate");
    }
    Ok(())
}
