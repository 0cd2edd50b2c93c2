//! Console API client module
//!
//! This module provides the SDK client the dispatchers forward to, the
//! `ConsoleSdk` trait they consume it through, and the process-wide default
//! client handle.

mod account;
mod client;
pub mod models;
mod organizations;
#[cfg(test)]
pub(crate) mod testing;
pub mod traits;

use async_trait::async_trait;
use log::debug;
use std::sync::{Arc, RwLock};

use crate::error::{ConsoleError, Result};
use crate::store::{migrate_config, ConfigStore};

pub use client::ConsoleClient;
pub use models::{
    Account, MfaChallenge, NewAccount, Organization, OrganizationList, Session, SessionGrant,
};
pub use traits::ConsoleSdk;

#[async_trait]
impl ConsoleSdk for ConsoleClient {
    fn endpoint(&self) -> &str {
        ConsoleClient::endpoint(self)
    }

    fn session_cookie(&self) -> Option<String> {
        self.cookie()
    }

    async fn create_email_password_session(
        &self,
        endpoint: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<SessionGrant> {
        ConsoleClient::create_email_password_session(self, endpoint, email, password).await
    }

    async fn create_mfa_challenge(
        &self,
        endpoint: Option<&str>,
        factor: &str,
    ) -> Result<MfaChallenge> {
        ConsoleClient::create_mfa_challenge(self, endpoint, factor).await
    }

    async fn update_mfa_challenge(
        &self,
        endpoint: Option<&str>,
        challenge_id: &str,
        otp: &str,
    ) -> Result<SessionGrant> {
        ConsoleClient::update_mfa_challenge(self, endpoint, challenge_id, otp).await
    }

    async fn create_account(&self, account: &NewAccount) -> Result<Account> {
        ConsoleClient::create_account(self, account).await
    }

    async fn get_account(&self) -> Result<Account> {
        ConsoleClient::get_account(self).await
    }

    async fn delete_session(&self, session_id: &str) -> Result<()> {
        ConsoleClient::delete_session(self, session_id).await
    }

    async fn list_organizations(
        &self,
        queries: &[String],
        search: Option<&str>,
    ) -> Result<serde_json::Value> {
        ConsoleClient::list_organizations(self, queries, search).await
    }
}

static DEFAULT_CLIENT: RwLock<Option<Arc<ConsoleClient>>> = RwLock::new(None);

/// Install the process-wide default client
pub fn install_default(client: Arc<ConsoleClient>) {
    debug!("Installing default console client for {}", client.endpoint());
    if let Ok(mut guard) = DEFAULT_CLIENT.write() {
        *guard = Some(client);
    }
}

/// Drop the process-wide default client
pub fn clear_default() {
    if let Ok(mut guard) = DEFAULT_CLIENT.write() {
        *guard = None;
    }
}

/// The process-wide default client.
///
/// Built from the preferences file and installed on first use if nothing was
/// installed explicitly.
pub fn default_client() -> Result<Arc<ConsoleClient>> {
    let installed = DEFAULT_CLIENT
        .read()
        .map_err(|_| ConsoleError::Config("Default client lock poisoned".to_string()))?
        .clone();
    if let Some(client) = installed {
        return Ok(client);
    }

    let mut config = ConfigStore::new().load()?;
    // Legacy sessions are read in place; only `migrate` rewrites the file
    migrate_config(&mut config);
    let client = Arc::new(ConsoleClient::from_config(&config));
    install_default(client.clone());
    Ok(client)
}
