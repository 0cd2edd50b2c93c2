//! Auth operations: validate options locally, forward to the SDK, persist sessions

use log::{debug, info, warn};

use crate::config::{api, store as store_config};
use crate::error::{ConsoleError, Result};
use crate::sdk::{Account, ConsoleClient, ConsoleSdk, NewAccount, SessionGrant};
use crate::store::{migrate_config, ConfigStore, LocalConfig, StoredSession};
use crate::ui::Prompter;

use super::options::{filled, ClientOptions, LoginCredentials, LoginOptions, RegisterOptions};

fn is_more_factors_required(err: &ConsoleError) -> bool {
    matches!(err, ConsoleError::Remote { kind, .. } if kind == api::MORE_FACTORS_REQUIRED)
}

/// Log in with an email/password pair, or complete a pending MFA challenge.
///
/// Nothing is sent unless one credential pair is complete. A successful
/// login becomes the current session in `store`.
pub async fn login_command(
    sdk: &dyn ConsoleSdk,
    store: &ConfigStore,
    options: &LoginOptions,
) -> Result<()> {
    let endpoint = options.endpoint.as_deref();

    let (grant, email) = match options.credentials()? {
        LoginCredentials::Password { email, password } => {
            debug!("Creating email session for {}", email);
            match sdk
                .create_email_password_session(endpoint, email, password)
                .await
            {
                Ok(grant) => (grant, Some(email)),
                Err(e) if is_more_factors_required(&e) => {
                    save_pending_session(sdk, store, endpoint, email)?;
                    return Err(ConsoleError::MfaRequired);
                }
                Err(e) => return Err(e),
            }
        }
        LoginCredentials::Mfa { challenge_id, code } => {
            debug!("Completing MFA challenge {}", challenge_id);
            let grant = sdk
                .update_mfa_challenge(endpoint, challenge_id, code)
                .await?;
            (grant, None)
        }
    };

    let session_id = grant.session.id.clone();
    save_session(sdk, store, endpoint, grant, email)?;
    info!("Logged in, session {}", session_id);
    Ok(())
}

fn session_endpoint(sdk: &dyn ConsoleSdk, endpoint: Option<&str>) -> String {
    endpoint
        .unwrap_or_else(|| sdk.endpoint())
        .trim_end_matches('/')
        .to_string()
}

/// Keep the half-authenticated cookie so the challenge can be completed later
fn save_pending_session(
    sdk: &dyn ConsoleSdk,
    store: &ConfigStore,
    endpoint: Option<&str>,
    email: &str,
) -> Result<()> {
    let Some(cookie) = sdk.session_cookie() else {
        return Err(ConsoleError::Unauthenticated(
            "Server asked for a second factor but returned no session cookie".to_string(),
        ));
    };

    let session = StoredSession {
        endpoint: session_endpoint(sdk, endpoint),
        email: Some(email.to_string()),
        cookie,
    };
    store.update(|config| {
        config.set_current_session(store_config::PENDING_SESSION_ID, session);
    })?;
    debug!("Stored pending session awaiting a second factor");
    Ok(())
}

fn save_session(
    sdk: &dyn ConsoleSdk,
    store: &ConfigStore,
    endpoint: Option<&str>,
    grant: SessionGrant,
    email: Option<&str>,
) -> Result<()> {
    let cookie = grant.cookie.ok_or_else(|| {
        ConsoleError::Unauthenticated("Server did not return a session cookie".to_string())
    })?;
    let session_endpoint = session_endpoint(sdk, endpoint);
    let email = email.map(String::from);

    store.update(|config| {
        let inherited = if config.current.as_deref() == Some(store_config::PENDING_SESSION_ID) {
            config.clear_current_session().and_then(|s| s.email)
        } else {
            None
        };
        if let Some(endpoint) = endpoint {
            config.endpoint = Some(endpoint.trim_end_matches('/').to_string());
        }
        config.set_current_session(
            &grant.session.id,
            StoredSession {
                endpoint: session_endpoint,
                email: email.or(inherited),
                cookie,
            },
        );
    })?;
    Ok(())
}

/// Interactive login: prompt for what is missing, then run the MFA loop
pub async fn login(
    sdk: &dyn ConsoleSdk,
    store: &ConfigStore,
    options: &LoginOptions,
    prompter: &dyn Prompter,
) -> Result<()> {
    let mut options = options.clone();
    if options.needs_prompt() {
        if filled(&options.mfa_token).is_some() {
            options.verification_code = Some(prompter.input("Verification code")?);
        } else {
            if filled(&options.email).is_none() {
                options.email = Some(prompter.input("Email")?);
            }
            if filled(&options.password).is_none() {
                options.password = Some(prompter.secret("Password")?);
            }
        }
    }

    match login_command(sdk, store, &options).await {
        Err(ConsoleError::MfaRequired) => {
            let challenge = sdk
                .create_mfa_challenge(options.endpoint.as_deref(), api::DEFAULT_MFA_FACTOR)
                .await?;
            warn!(
                "Second factor required. Challenge {} created; complete it with --mfa-token {} --code <code>",
                challenge.id, challenge.id
            );
            let code = prompter.input("Verification code")?;

            let mfa = LoginOptions {
                endpoint: options.endpoint.clone(),
                mfa_token: Some(challenge.id),
                verification_code: Some(code),
                ..Default::default()
            };
            login_command(sdk, store, &mfa).await
        }
        other => other,
    }
}

/// Account behind the current session
pub async fn whoami(sdk: &dyn ConsoleSdk, store: &ConfigStore) -> Result<Account> {
    let config = store.load()?;
    match config.current.as_deref() {
        Some(store_config::PENDING_SESSION_ID) => {
            return Err(ConsoleError::Unauthenticated(
                "Login is waiting for a second factor. Run 'consolectl login --mfa-token <id> --code <code>'"
                    .to_string(),
            ));
        }
        Some(_) if config.current_session().is_some() => {}
        _ => {
            return Err(ConsoleError::Unauthenticated(
                "Not logged in. Run 'consolectl login' first".to_string(),
            ));
        }
    }

    sdk.get_account().await
}

/// Create a console account
pub async fn register(sdk: &dyn ConsoleSdk, options: &RegisterOptions) -> Result<Account> {
    let (email, password) = options.required()?;
    let account = NewAccount {
        user_id: api::UNIQUE_ID.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        name: filled(&options.name).map(String::from),
    };
    debug!("Registering account for {}", email);
    sdk.create_account(&account).await
}

/// End the current session. Safe to call when already logged out.
///
/// The local session is cleared even if the server rejects the request;
/// errors other than "already gone" are still reported.
pub async fn logout(sdk: &dyn ConsoleSdk, store: &ConfigStore) -> Result<()> {
    let config = store.load()?;
    let Some(current) = config.current.clone() else {
        debug!("No current session, nothing to log out");
        return Ok(());
    };

    let remote = if current == store_config::PENDING_SESSION_ID
        || config.current_session().is_none()
    {
        Ok(())
    } else {
        match sdk.delete_session(api::CURRENT_SESSION_ID).await {
            Err(e) if matches!(e.status(), Some(401) | Some(404)) => {
                warn!("Session was already gone on the server: {}", e);
                Ok(())
            }
            other => other,
        }
    };

    store.update(|config| {
        config.clear_current_session();
    })?;
    info!("Cleared local session {}", current);
    remote
}

/// Apply client settings to the preferences file and build a client from them.
///
/// Synchronous: only the local preferences file is touched.
pub fn client(store: &ConfigStore, options: &ClientOptions) -> Result<ConsoleClient> {
    options.validate()?;

    let config = if options.has_changes() {
        store.update(|config| apply_client_options(config, options))?
    } else {
        store.load()?
    };
    Ok(ConsoleClient::from_config(&config))
}

fn apply_client_options(config: &mut LocalConfig, options: &ClientOptions) {
    if options.reset {
        info!("Resetting client configuration");
        *config = LocalConfig::default();
    }
    if let Some(endpoint) = &options.endpoint {
        config.endpoint = Some(endpoint.trim_end_matches('/').to_string());
    }
    if let Some(project) = &options.project_id {
        config.project = Some(project.clone());
    }
    if let Some(key) = &options.key {
        config.key = Some(key.clone());
    }
    if let Some(self_signed) = options.self_signed {
        config.self_signed = self_signed;
    }
}

/// Upgrade a legacy preferences file. No-op if absent or already current.
///
/// Synchronous: only the local preferences file is touched.
pub fn migrate(store: &ConfigStore) -> Result<()> {
    if !store.exists() {
        debug!("No preferences file at {}", store.path().display());
        return Ok(());
    }

    let mut config = store.load()?;
    if !migrate_config(&mut config) {
        debug!("Preferences already at layout v{}", config.version);
        return Ok(());
    }

    store.save(&config)?;
    info!(
        "Migrated {} to layout v{}",
        store.path().display(),
        config.version
    );
    Ok(())
}
