//! consolectl - command-line client for the Appwrite console API
//!
//! Logs in to a console (including the TOTP second factor), keeps sessions
//! in a local preferences file, and lists the organizations the session can
//! see.
//!
//! # Example
//!
//! ```bash
//! # Point the client at a self-hosted console
//! consolectl client --endpoint https://appwrite.corp.com/v1
//!
//! # Log in (prompts for anything missing)
//! consolectl login --email me@example.com
//!
//! # Who am I?
//! consolectl whoami -o json
//!
//! # List organizations matching a search term
//! consolectl organizations list --search acme
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod organizations;
pub mod output;
pub mod sdk;
pub mod store;
pub mod ui;

pub use auth::{
    client, login, login_command, logout, migrate, register, whoami, ClientOptions,
    LoginOptions, RegisterOptions,
};
pub use cli::{Cli, Command, OrganizationsAction, OutputFormat};
pub use error::{ConsoleError, Result};
pub use organizations::{organizations_list, OrganizationsListOptions, OrganizationsOutput};
pub use sdk::{ConsoleClient, ConsoleSdk};
pub use store::{ConfigStore, LocalConfig};
