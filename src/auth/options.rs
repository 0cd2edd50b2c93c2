//! Option records for the auth commands

use crate::error::{ConsoleError, Result};
use crate::ui::Prompter;

/// Options for `login_command`.
///
/// No field is required by the type; `credentials()` decides at call time
/// whether the combination is usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginOptions {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Endpoint to log in against instead of the configured one
    pub endpoint: Option<String>,
    /// ID of a pending MFA challenge
    pub mfa_token: Option<String>,
    /// Code answering the pending MFA challenge
    pub verification_code: Option<String>,
}

/// A complete credential pair extracted from `LoginOptions`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginCredentials<'a> {
    Password { email: &'a str, password: &'a str },
    Mfa { challenge_id: &'a str, code: &'a str },
}

/// Present and not blank
pub(super) fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl LoginOptions {
    /// Pick the credential pair to log in with.
    ///
    /// A complete MFA pair wins over a complete password pair since it
    /// finishes a login already in progress.
    pub fn credentials(&self) -> Result<LoginCredentials<'_>> {
        if let (Some(challenge_id), Some(code)) =
            (filled(&self.mfa_token), filled(&self.verification_code))
        {
            return Ok(LoginCredentials::Mfa { challenge_id, code });
        }

        if let (Some(email), Some(password)) = (filled(&self.email), filled(&self.password)) {
            return Ok(LoginCredentials::Password { email, password });
        }

        Err(ConsoleError::InvalidArgument(
            "login needs --email and --password, or --mfa-token and --code to complete a pending challenge"
                .to_string(),
        ))
    }

    /// Whether the CLI should prompt for email/password before dispatching
    pub fn needs_prompt(&self) -> bool {
        self.credentials().is_err()
    }
}

/// Options for `register`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterOptions {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl RegisterOptions {
    /// Email and password, both required before anything is sent
    pub fn required(&self) -> Result<(&str, &str)> {
        match (filled(&self.email), filled(&self.password)) {
            (Some(email), Some(password)) => Ok((email, password)),
            (None, _) => Err(ConsoleError::InvalidArgument(
                "register needs --email".to_string(),
            )),
            (_, None) => Err(ConsoleError::InvalidArgument(
                "register needs --password".to_string(),
            )),
        }
    }

    /// Ask for the email and password that `required()` would reject
    pub fn prompt_missing(&mut self, prompter: &dyn Prompter) -> Result<()> {
        if filled(&self.email).is_none() {
            self.email = Some(prompter.input("Email")?);
        }
        if filled(&self.password).is_none() {
            self.password = Some(prompter.secret("Password")?);
        }
        Ok(())
    }
}

/// Options for `client`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientOptions {
    pub endpoint: Option<String>,
    pub project_id: Option<String>,
    pub key: Option<String>,
    pub self_signed: Option<bool>,
    /// Wipe the stored configuration (including sessions) first
    pub reset: bool,
    /// Print the effective configuration
    pub debug: bool,
}

impl ClientOptions {
    /// Check option shapes before touching the preferences file
    pub fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConsoleError::InvalidArgument(format!(
                    "endpoint '{}' must start with http:// or https://",
                    endpoint
                )));
            }
        }
        for (flag, value) in [("--project-id", &self.project_id), ("--key", &self.key)] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConsoleError::InvalidArgument(format!(
                    "{} must not be empty",
                    flag
                )));
            }
        }
        Ok(())
    }

    /// Whether any setting would be written
    pub fn has_changes(&self) -> bool {
        self.reset
            || self.endpoint.is_some()
            || self.project_id.is_some()
            || self.key.is_some()
            || self.self_signed.is_some()
    }
}
