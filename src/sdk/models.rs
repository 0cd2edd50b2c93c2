//! Console API data models

use serde::{Deserialize, Serialize};

/// Error body returned by the console API
#[derive(Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: u16,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Account of the logged-in user
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Account {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: bool,
    #[serde(rename = "emailVerification", default)]
    pub email_verification: bool,
    #[serde(default)]
    pub mfa: bool,
    #[serde(default)]
    pub registration: String,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Login session as returned by the console API
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Session {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub expire: String,
}

/// A created session together with the cookie that authenticates it
#[derive(Debug, Clone, PartialEq)]
pub struct SessionGrant {
    pub session: Session,
    /// `name=value` pairs from Set-Cookie, joined with "; "
    pub cookie: Option<String>,
}

/// Pending MFA challenge
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MfaChallenge {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub expire: String,
}

/// Registration request body
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewAccount {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Organization (a console team)
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Organization {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Number of members
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "$createdAt", default)]
    pub created_at: String,
    #[serde(rename = "$updatedAt", default)]
    pub updated_at: String,
}

/// Parsed organizations list
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct OrganizationList {
    #[serde(default)]
    pub total: u64,
    #[serde(rename(deserialize = "teams"), default)]
    pub organizations: Vec<Organization>,
}

impl OrganizationList {
    /// Parse a raw list payload
    pub fn from_raw(raw: &serde_json::Value) -> crate::error::Result<Self> {
        Ok(serde_json::from_value(raw.clone())?)
    }
}
