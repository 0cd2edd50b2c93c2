//! CLI argument parsing

mod auth;
mod common;
mod organizations;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use auth::{ClientArgs, LoginArgs, RegisterArgs, WhoamiArgs};
pub use common::OutputFormat;
pub use organizations::{OrganizationsAction, OrganizationsListArgs};

/// Command-line client for the Appwrite console API
#[derive(Parser, Debug)]
#[command(name = "consolectl")]
#[command(version)]
#[command(about = "Log in to an Appwrite console and explore its resources", long_about = None)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Never prompt; missing values are errors
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Omit headers and totals from table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in with email and password, or complete an MFA challenge
    Login(LoginArgs),

    /// Create a console account
    Register(RegisterArgs),

    /// End the current session
    Logout,

    /// Show the account behind the current session
    Whoami(WhoamiArgs),

    /// Configure the endpoint, project and key used by the client
    Client(ClientArgs),

    /// Upgrade a preferences file written by an older version
    Migrate,

    /// Organization commands
    #[command(alias = "orgs")]
    Organizations {
        #[command(subcommand)]
        action: OrganizationsAction,
    },
}
