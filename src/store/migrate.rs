//! Preferences layout migration

use log::debug;

use crate::config::store as store_config;

use super::models::{LocalConfig, StoredSession};

/// Upgrade a legacy single-session layout in place.
///
/// The legacy layout kept `cookie` and `email` at the top level. They move
/// into the `sessions` map under a fixed ID, which becomes the current
/// session unless one is already set.
///
/// Returns `true` if anything changed.
pub fn migrate_config(config: &mut LocalConfig) -> bool {
    if !config.needs_migration() {
        return false;
    }

    if let Some(cookie) = config.cookie.take() {
        let session = StoredSession {
            endpoint: config.effective_endpoint().to_string(),
            email: config.email.take(),
            cookie,
        };
        debug!(
            "Moving legacy session into sessions['{}']",
            store_config::LEGACY_SESSION_ID
        );
        config
            .sessions
            .insert(store_config::LEGACY_SESSION_ID.to_string(), session);
        if config.current.is_none() {
            config.current = Some(store_config::LEGACY_SESSION_ID.to_string());
        }
    }
    config.email = None;
    config.version = store_config::CURRENT_VERSION;
    true
}
