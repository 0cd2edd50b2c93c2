//! Preferences file data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{defaults, store as store_config};

/// Top-level preferences file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Layout version (absent in the legacy single-session layout)
    #[serde(default)]
    pub version: u32,
    /// Console endpoint, e.g. https://cloud.appwrite.io/v1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Project ID used by project-scoped calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// API key (stored in config file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Accept self-signed TLS certificates
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub self_signed: bool,
    /// ID of the active session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Map of session ID to stored session
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sessions: BTreeMap<String, StoredSession>,
    /// Legacy layout: session cookie at the top level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
    /// Legacy layout: account email at the top level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A login session persisted between invocations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Endpoint the session was created against
    pub endpoint: String,
    /// Account email, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Session cookie sent back on every request
    pub cookie: String,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            version: store_config::CURRENT_VERSION,
            endpoint: None,
            project: None,
            key: None,
            self_signed: false,
            current: None,
            sessions: BTreeMap::new(),
            cookie: None,
            email: None,
        }
    }
}

impl LocalConfig {
    /// Endpoint to talk to: configured value or the public default
    pub fn effective_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(defaults::ENDPOINT)
    }

    /// The active session, if one is set and present
    pub fn current_session(&self) -> Option<&StoredSession> {
        self.current.as_ref().and_then(|id| self.sessions.get(id))
    }

    /// Store a session and make it the active one
    pub fn set_current_session(&mut self, id: &str, session: StoredSession) {
        self.sessions.insert(id.to_string(), session);
        self.current = Some(id.to_string());
    }

    /// Remove the active session, returning it
    pub fn clear_current_session(&mut self) -> Option<StoredSession> {
        let id = self.current.take()?;
        self.sessions.remove(&id)
    }

    /// Whether the file still uses an older layout
    pub fn needs_migration(&self) -> bool {
        self.version < store_config::CURRENT_VERSION
    }
}
