//! The seam between dispatchers and the console API

use async_trait::async_trait;

use crate::error::Result;

use super::models::{Account, MfaChallenge, NewAccount, SessionGrant};

/// Operations the dispatchers need from a console API client.
///
/// All methods take `&self`: a handle is shared between the caller and the
/// dispatchers and is never mutated by them. Session state a client keeps
/// between calls lives behind its own interior lock.
#[async_trait]
pub trait ConsoleSdk: Send + Sync {
    /// Endpoint requests go to when no override is given
    fn endpoint(&self) -> &str;

    /// Cookie of the session this client currently holds, if any
    fn session_cookie(&self) -> Option<String>;

    /// Create a session from email and password.
    ///
    /// Sent without the held cookie, which is replaced by whatever the
    /// response sets.
    async fn create_email_password_session(
        &self,
        endpoint: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<SessionGrant>;

    /// Start a challenge for a pending second factor
    async fn create_mfa_challenge(
        &self,
        endpoint: Option<&str>,
        factor: &str,
    ) -> Result<MfaChallenge>;

    /// Complete a pending challenge with its verification code
    async fn update_mfa_challenge(
        &self,
        endpoint: Option<&str>,
        challenge_id: &str,
        otp: &str,
    ) -> Result<SessionGrant>;

    /// Register a new account
    async fn create_account(&self, account: &NewAccount) -> Result<Account>;

    /// Account behind the current session
    async fn get_account(&self) -> Result<Account>;

    /// Delete a session ("current" for the one this client holds)
    async fn delete_session(&self, session_id: &str) -> Result<()>;

    /// List organizations, forwarding queries verbatim and in order
    async fn list_organizations(
        &self,
        queries: &[String],
        search: Option<&str>,
    ) -> Result<serde_json::Value>;
}
