//! Account and session API operations

use log::debug;

use crate::config::api;
use crate::error::Result;

use super::models::{Account, MfaChallenge, NewAccount, Session, SessionGrant};
use super::ConsoleClient;

impl ConsoleClient {
    /// Create an email/password session.
    ///
    /// The request never carries the held cookie, and the held cookie is
    /// replaced by whatever the response sets. The cookie is captured even
    /// when the server rejects the login so a session waiting on a second
    /// factor can be completed later.
    pub async fn create_email_password_session(
        &self,
        endpoint: Option<&str>,
        email: &str,
        password: &str,
    ) -> Result<SessionGrant> {
        let url = self.url(endpoint, api::EMAIL_SESSIONS);
        debug!("Creating email session for {} at {}", email, url);

        let response = self
            .post_without_session(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let cookie = self.capture_cookie(&response);
        if cookie.is_none() {
            self.set_cookie(None);
        }
        let session: Session = self
            .parse_api_response(response, "create email session")
            .await?;
        debug!("Created session {} for user {}", session.id, session.user_id);

        Ok(SessionGrant { session, cookie })
    }

    /// Start an MFA challenge for the pending session
    pub async fn create_mfa_challenge(
        &self,
        endpoint: Option<&str>,
        factor: &str,
    ) -> Result<MfaChallenge> {
        let url = self.url(endpoint, api::MFA_CHALLENGE);
        debug!("Creating {} MFA challenge at {}", factor, url);

        let response = self
            .post(&url)
            .json(&serde_json::json!({ "factor": factor }))
            .send()
            .await?;
        self.parse_api_response(response, "create MFA challenge")
            .await
    }

    /// Complete an MFA challenge
    pub async fn update_mfa_challenge(
        &self,
        endpoint: Option<&str>,
        challenge_id: &str,
        otp: &str,
    ) -> Result<SessionGrant> {
        let url = self.url(endpoint, api::MFA_CHALLENGE);
        debug!("Completing MFA challenge {} at {}", challenge_id, url);

        let response = self
            .put(&url)
            .json(&serde_json::json!({ "challengeId": challenge_id, "otp": otp }))
            .send()
            .await?;

        let cookie = self.capture_cookie(&response);
        let session: Session = self
            .parse_api_response(response, "complete MFA challenge")
            .await?;

        Ok(SessionGrant {
            session,
            cookie: cookie.or_else(|| self.cookie()),
        })
    }

    /// Register a new account
    pub async fn create_account(&self, account: &NewAccount) -> Result<Account> {
        let url = self.url(None, api::ACCOUNT);
        debug!("Registering account {} at {}", account.email, url);

        let response = self.post(&url).json(account).send().await?;
        self.parse_api_response(response, "create account").await
    }

    /// Get the account behind the current session
    pub async fn get_account(&self) -> Result<Account> {
        let url = self.url(None, api::ACCOUNT);
        debug!("Fetching account from: {}", url);

        let response = self.get(&url).send().await?;
        self.parse_api_response(response, "fetch account").await
    }

    /// Delete a session by ID
    pub async fn delete_session(&self, session_id: &str) -> Result<()> {
        let url = self.url(
            None,
            &format!("{}/{}", api::SESSIONS, urlencoding::encode(session_id)),
        );
        debug!("Deleting session: {}", url);

        let response = self.delete(&url).send().await?;
        self.expect_success(response, "delete session").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "$id": id,
            "userId": "user-1",
            "provider": "email",
            "expire": "2026-01-01T00:00:00.000+00:00"
        })
    }

    fn account_json() -> serde_json::Value {
        serde_json::json!({
            "$id": "user-1",
            "name": "Jane",
            "email": "jane@example.com",
            "status": true,
            "emailVerification": true,
            "mfa": false,
            "registration": "2025-01-01T00:00:00.000+00:00"
        })
    }

    #[tokio::test]
    async fn test_create_email_password_session_success() {
        let mock_server = MockServer::start().await;
        let client = ConsoleClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/account/sessions/email"))
            .and(body_json(serde_json::json!({
                "email": "jane@example.com",
                "password": "hunter22"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .append_header("set-cookie", "a_session_console=abc; path=/; httponly")
                    .set_body_json(session_json("sess-1")),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let grant = client
            .create_email_password_session(None, "jane@example.com", "hunter22")
            .await
            .unwrap();
        assert_eq!(grant.session.id, "sess-1");
        assert_eq!(grant.cookie.as_deref(), Some("a_session_console=abc"));
        assert_eq!(client.cookie().as_deref(), Some("a_session_console=abc"));
    }

    #[tokio::test]
    async fn test_create_session_against_endpoint_override() {
        let default_server = MockServer::start().await;
        let other_server = MockServer::start().await;
        let client = ConsoleClient::test_client(&default_server.uri());

        Mock::given(method("POST"))
            .and(path("/account/sessions/email"))
            .respond_with(ResponseTemplate::new(201).set_body_json(session_json("sess-2")))
            .expect(1)
            .mount(&other_server)
            .await;

        let grant = client
            .create_email_password_session(Some(&other_server.uri()), "a@b.c", "pw")
            .await
            .unwrap();
        assert_eq!(grant.session.id, "sess-2");
        assert!(grant.cookie.is_none());
    }

    #[tokio::test]
    async fn test_create_session_does_not_send_held_cookie() {
        let default_server = MockServer::start().await;
        let other_server = MockServer::start().await;
        let client = ConsoleClient::test_client(&default_server.uri())
            .with_cookie("a_session_console=home");

        Mock::given(method("POST"))
            .and(path("/account/sessions/email"))
            .respond_with(ResponseTemplate::new(201).set_body_json(session_json("sess-2")))
            .expect(1)
            .mount(&other_server)
            .await;

        let grant = client
            .create_email_password_session(Some(&other_server.uri()), "a@b.c", "pw")
            .await
            .unwrap();
        assert!(grant.cookie.is_none());
        assert!(client.cookie().is_none());

        let requests = other_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("cookie").is_none());
    }

    #[tokio::test]
    async fn test_relogin_replaces_held_cookie() {
        let mock_server = MockServer::start().await;
        let client =
            ConsoleClient::test_client(&mock_server.uri()).with_cookie("a_session_console=old");

        Mock::given(method("POST"))
            .and(path("/account/sessions/email"))
            .and(header("Cookie", "a_session_console=old"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Creation of a session is prohibited when a session is active.",
                "code": 401,
                "type": "user_session_already_exists"
            })))
            .with_priority(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/account/sessions/email"))
            .respond_with(
                ResponseTemplate::new(201)
                    .append_header("set-cookie", "a_session_console=new; path=/")
                    .set_body_json(session_json("sess-3")),
            )
            .with_priority(2)
            .expect(1)
            .mount(&mock_server)
            .await;

        let grant = client
            .create_email_password_session(None, "jane@example.com", "hunter22")
            .await
            .unwrap();
        assert_eq!(grant.session.id, "sess-3");
        assert_eq!(grant.cookie.as_deref(), Some("a_session_console=new"));
        assert_eq!(client.cookie().as_deref(), Some("a_session_console=new"));
    }

    #[tokio::test]
    async fn test_create_session_more_factors_keeps_cookie() {
        let mock_server = MockServer::start().await;
        let client = ConsoleClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/account/sessions/email"))
            .respond_with(
                ResponseTemplate::new(401)
                    .append_header("set-cookie", "a_session_console=pending; path=/")
                    .set_body_json(serde_json::json!({
                        "message": "More factors are required to complete the sign in process.",
                        "code": 401,
                        "type": "user_more_factors_required"
                    })),
            )
            .mount(&mock_server)
            .await;

        let err = client
            .create_email_password_session(None, "jane@example.com", "hunter22")
            .await
            .unwrap_err();
        match err {
            ConsoleError::Remote { status, kind, .. } => {
                assert_eq!(status, 401);
                assert_eq!(kind, api::MORE_FACTORS_REQUIRED);
            }
            other => panic!("Expected ConsoleError::Remote, got {:?}", other),
        }
        assert_eq!(client.cookie().as_deref(), Some("a_session_console=pending"));
    }

    #[tokio::test]
    async fn test_create_session_invalid_credentials() {
        let mock_server = MockServer::start().await;
        let client = ConsoleClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/account/sessions/email"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Invalid credentials.",
                "code": 401,
                "type": "user_invalid_credentials"
            })))
            .mount(&mock_server)
            .await;

        let err = client
            .create_email_password_session(None, "jane@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(err.is_remote());
        assert!(err.to_string().contains("Invalid credentials."));
    }

    #[tokio::test]
    async fn test_mfa_challenge_roundtrip() {
        let mock_server = MockServer::start().await;
        let client =
            ConsoleClient::test_client(&mock_server.uri()).with_cookie("a_session_console=pending");

        Mock::given(method("POST"))
            .and(path("/account/mfa/challenge"))
            .and(body_json(serde_json::json!({"factor": "totp"})))
            .and(header("Cookie", "a_session_console=pending"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "$id": "chal-1",
                "userId": "user-1",
                "expire": "2026-01-01T00:00:00.000+00:00"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/account/mfa/challenge"))
            .and(body_json(serde_json::json!({"challengeId": "chal-1", "otp": "123456"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(session_json("sess-1")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let challenge = client.create_mfa_challenge(None, "totp").await.unwrap();
        assert_eq!(challenge.id, "chal-1");

        let grant = client
            .update_mfa_challenge(None, &challenge.id, "123456")
            .await
            .unwrap();
        assert_eq!(grant.session.id, "sess-1");
        // No new Set-Cookie: the pending cookie is now the full session
        assert_eq!(grant.cookie.as_deref(), Some("a_session_console=pending"));
    }

    #[tokio::test]
    async fn test_create_account_success() {
        let mock_server = MockServer::start().await;
        let client = ConsoleClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/account"))
            .and(body_json(serde_json::json!({
                "userId": "unique()",
                "email": "jane@example.com",
                "password": "hunter22",
                "name": "Jane"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(account_json()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let account = client
            .create_account(&NewAccount {
                user_id: api::UNIQUE_ID.to_string(),
                email: "jane@example.com".to_string(),
                password: "hunter22".to_string(),
                name: Some("Jane".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(account.id, "user-1");
    }

    #[tokio::test]
    async fn test_get_account_unauthorized() {
        let mock_server = MockServer::start().await;
        let client = ConsoleClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/account"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "User (role: guests) missing scope (account)",
                "code": 401,
                "type": "general_unauthorized_scope"
            })))
            .mount(&mock_server)
            .await;

        let err = client.get_account().await.unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[tokio::test]
    async fn test_get_account_success() {
        let mock_server = MockServer::start().await;
        let client =
            ConsoleClient::test_client(&mock_server.uri()).with_cookie("a_session_console=abc");

        Mock::given(method("GET"))
            .and(path("/account"))
            .and(header("Cookie", "a_session_console=abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(account_json()))
            .mount(&mock_server)
            .await;

        let account = client.get_account().await.unwrap();
        assert_eq!(account.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_delete_current_session() {
        let mock_server = MockServer::start().await;
        let client = ConsoleClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/account/sessions/current"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        client
            .delete_session(api::CURRENT_SESSION_ID)
            .await
            .unwrap();
    }
}
