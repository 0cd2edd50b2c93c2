//! Authentication and client configuration
//!
//! Validates login, registration and client options locally, forwards them
//! to the console SDK, and keeps the preferences file in step with the
//! sessions the server hands out.

mod commands;
mod dispatch;
mod options;

pub use commands::{
    run_client_command, run_login_command, run_logout_command, run_migrate_command,
    run_register_command, run_whoami_command,
};
pub use dispatch::{client, login, login_command, logout, migrate, register, whoami};
pub use options::{ClientOptions, LoginCredentials, LoginOptions, RegisterOptions};
