//! Auth CLI arguments

use clap::Parser;

use super::common::OutputFormat;
use crate::auth::{ClientOptions, LoginOptions, RegisterOptions};
use crate::config::defaults;

/// Arguments for 'login'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        consolectl login --email me@example.com\n  \
        consolectl login --email me@example.com --endpoint https://appwrite.corp.com/v1\n  \
        consolectl login --mfa-token <CHALLENGE_ID> --code 123456")]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: Option<String>,

    /// Account password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Console endpoint to log in against
    #[arg(long, env = defaults::ENDPOINT_ENV_VAR)]
    pub endpoint: Option<String>,

    /// ID of a pending MFA challenge
    #[arg(long, requires = "code")]
    pub mfa_token: Option<String>,

    /// Code answering the MFA challenge
    #[arg(long)]
    pub code: Option<String>,
}

impl From<&LoginArgs> for LoginOptions {
    fn from(args: &LoginArgs) -> Self {
        Self {
            email: args.email.clone(),
            password: args.password.clone(),
            endpoint: args.endpoint.clone(),
            mfa_token: args.mfa_token.clone(),
            verification_code: args.code.clone(),
        }
    }
}

/// Arguments for 'register'
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    /// Account email
    #[arg(long)]
    pub email: Option<String>,

    /// Account password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl From<&RegisterArgs> for RegisterOptions {
    fn from(args: &RegisterArgs) -> Self {
        Self {
            email: args.email.clone(),
            password: args.password.clone(),
            name: args.name.clone(),
        }
    }
}

/// Arguments for 'whoami'
#[derive(Parser, Debug)]
pub struct WhoamiArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'client'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        consolectl client --endpoint https://appwrite.corp.com/v1 --self-signed true\n  \
        consolectl client --project-id my-project --key <API_KEY>\n  \
        consolectl client --debug\n  \
        consolectl client --reset")]
pub struct ClientArgs {
    /// Console endpoint, e.g. https://cloud.appwrite.io/v1
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Project ID for project-scoped calls
    #[arg(long)]
    pub project_id: Option<String>,

    /// API key (stored in the preferences file)
    #[arg(long)]
    pub key: Option<String>,

    /// Accept self-signed TLS certificates
    #[arg(long, value_name = "BOOL")]
    pub self_signed: Option<bool>,

    /// Wipe the stored configuration and sessions first
    #[arg(long, default_value_t = false)]
    pub reset: bool,

    /// Print the effective configuration
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl From<&ClientArgs> for ClientOptions {
    fn from(args: &ClientArgs) -> Self {
        Self {
            endpoint: args.endpoint.clone(),
            project_id: args.project_id.clone(),
            key: args.key.clone(),
            self_signed: args.self_signed,
            reset: args.reset,
            debug: args.debug,
        }
    }
}
