//! Local preferences store
//!
//! Persists the console endpoint, project, API key and login sessions
//! between invocations.

mod file;
mod migrate;
mod models;

pub use file::ConfigStore;
pub use migrate::migrate_config;
pub use models::{LocalConfig, StoredSession};
