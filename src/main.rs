//! consolectl - main entry point

use std::sync::Arc;

use clap::Parser;
use log::{debug, info};

use consolectl::auth::{
    self, run_client_command, run_login_command, run_logout_command, run_migrate_command,
    run_register_command, run_whoami_command,
};
use consolectl::organizations::run_organizations_list;
use consolectl::sdk::{self, ConsoleClient};
use consolectl::{Cli, Command, ConfigStore, OrganizationsAction};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting consolectl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = ConfigStore::new();
    debug!("Using preferences file {}", store.path().display());

    if let Command::Migrate = &cli.command {
        return run_migrate_command(&store);
    }
    // Every other command reads the v2 layout
    auth::migrate(&store)?;

    if let Command::Client(args) = &cli.command {
        return run_client_command(&store, args);
    }

    let client = Arc::new(ConsoleClient::from_config(&store.load()?));
    sdk::install_default(client.clone());

    match &cli.command {
        Command::Login(args) => run_login_command(client.as_ref(), &store, cli, args).await,
        Command::Register(args) => run_register_command(client.as_ref(), cli, args).await,
        Command::Logout => run_logout_command(client.as_ref(), &store).await,
        Command::Whoami(args) => run_whoami_command(client.as_ref(), &store, cli, args).await,
        Command::Organizations {
            action: OrganizationsAction::List(args),
        } => run_organizations_list(cli, args).await,
        Command::Client(_) | Command::Migrate => Ok(()),
    }
}
