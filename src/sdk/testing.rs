//! Recording stand-in for the console API, used by dispatcher tests

use async_trait::async_trait;
use std::sync::Mutex;

use crate::config::api;
use crate::error::{ConsoleError, Result};

use super::models::{Account, MfaChallenge, NewAccount, Session, SessionGrant};
use super::ConsoleSdk;

/// A call received by `FakeSdk`
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateSession {
        endpoint: Option<String>,
        email: String,
        password: String,
    },
    CreateChallenge {
        factor: String,
    },
    UpdateChallenge {
        challenge_id: String,
        otp: String,
    },
    CreateAccount(NewAccount),
    GetAccount,
    DeleteSession(String),
    ListOrganizations {
        queries: Vec<String>,
        search: Option<String>,
    },
}

/// Scripted console API
pub struct FakeSdk {
    pub endpoint: String,
    /// Password login answers "more factors required"
    pub mfa_required: bool,
    /// Status and type for failing login / registration / account calls
    pub remote_error: Option<(u16, String)>,
    /// Status for failing session deletion
    pub delete_status: Option<u16>,
    /// Payload returned by list_organizations
    pub organizations: serde_json::Value,
    pub(crate) calls: Mutex<Vec<Call>>,
    pub(crate) cookie: Mutex<Option<String>>,
}

impl Default for FakeSdk {
    fn default() -> Self {
        Self {
            endpoint: "https://fake.example.com/v1".to_string(),
            mfa_required: false,
            remote_error: None,
            delete_status: None,
            organizations: serde_json::json!({"total": 0, "teams": []}),
            calls: Mutex::new(Vec::new()),
            cookie: Mutex::new(None),
        }
    }
}

impl FakeSdk {
    /// Start out holding a session cookie
    pub fn with_cookie(self, cookie: &str) -> Self {
        self.set_cookie(Some(cookie));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn set_cookie(&self, cookie: Option<&str>) {
        *self.cookie.lock().unwrap() = cookie.map(String::from);
    }

    fn remote(status: u16, kind: &str) -> ConsoleError {
        ConsoleError::Remote {
            status,
            kind: kind.to_string(),
            message: format!("fake {}", kind),
        }
    }

    fn grant(&self, id: &str) -> SessionGrant {
        SessionGrant {
            session: Session {
                id: id.to_string(),
                user_id: "user-1".to_string(),
                provider: "email".to_string(),
                expire: String::new(),
            },
            cookie: self.session_cookie(),
        }
    }

    fn account(email: &str) -> Account {
        Account {
            id: "user-1".to_string(),
            name: "Jane".to_string(),
            email: email.to_string(),
            status: true,
            email_verification: false,
            mfa: false,
            registration: "2025-01-01T00:00:00.000+00:00".to_string(),
            labels: Vec::new(),
        }
    }
}

#[async_trait]
impl ConsoleSdk for FakeSdk {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn session_cookie(&self) -> Option<String> {
        self.cookie.lock().unwrap().clone()
    }

    async fn create_email_password_session(
        &self,
        endpoint: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<SessionGrant> {
        self.record(Call::CreateSession {
            endpoint: endpoint.map(String::from),
            email: email.to_string(),
            password: password.to_string(),
        });
        // A password login never reuses the held session
        self.set_cookie(None);
        if self.mfa_required {
            self.set_cookie(Some("a_session_console=pending"));
            return Err(Self::remote(401, api::MORE_FACTORS_REQUIRED));
        }
        if let Some((status, kind)) = &self.remote_error {
            return Err(Self::remote(*status, kind));
        }
        self.set_cookie(Some("a_session_console=sess-1"));
        Ok(self.grant("sess-1"))
    }

    async fn create_mfa_challenge(
        &self,
        _endpoint: Option<&str>,
        factor: &str,
    ) -> Result<MfaChallenge> {
        self.record(Call::CreateChallenge {
            factor: factor.to_string(),
        });
        Ok(MfaChallenge {
            id: "chal-1".to_string(),
            user_id: "user-1".to_string(),
            expire: String::new(),
        })
    }

    async fn update_mfa_challenge(
        &self,
        _endpoint: Option<&str>,
        challenge_id: &str,
        otp: &str,
    ) -> Result<SessionGrant> {
        self.record(Call::UpdateChallenge {
            challenge_id: challenge_id.to_string(),
            otp: otp.to_string(),
        });
        if self.session_cookie().is_none() {
            return Err(Self::remote(401, "user_unauthorized"));
        }
        Ok(self.grant("sess-mfa"))
    }

    async fn create_account(&self, account: &NewAccount) -> Result<Account> {
        self.record(Call::CreateAccount(account.clone()));
        if let Some((status, kind)) = &self.remote_error {
            return Err(Self::remote(*status, kind));
        }
        Ok(Self::account(&account.email))
    }

    async fn get_account(&self) -> Result<Account> {
        self.record(Call::GetAccount);
        if let Some((status, kind)) = &self.remote_error {
            return Err(Self::remote(*status, kind));
        }
        Ok(Self::account("jane@example.com"))
    }

    async fn delete_session(&self, session_id: &str) -> Result<()> {
        self.record(Call::DeleteSession(session_id.to_string()));
        match self.delete_status {
            Some(status) => Err(Self::remote(status, "general_error")),
            None => Ok(()),
        }
    }

    async fn list_organizations(
        &self,
        queries: &[String],
        search: Option<&str>,
    ) -> Result<serde_json::Value> {
        self.record(Call::ListOrganizations {
            queries: queries.to_vec(),
            search: search.map(String::from),
        });
        Ok(self.organizations.clone())
    }
}
