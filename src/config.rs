/// Configuration constants for the console API
pub mod api {
    /// Project ID used for console (admin) calls
    pub const CONSOLE_PROJECT: &str = "console";

    /// Response format version requested from the server
    pub const RESPONSE_FORMAT: &str = "1.6.0";

    /// Account endpoint
    pub const ACCOUNT: &str = "account";

    /// Email/password session endpoint
    pub const EMAIL_SESSIONS: &str = "account/sessions/email";

    /// Sessions endpoint
    pub const SESSIONS: &str = "account/sessions";

    /// Session ID addressing the session the request is made with
    pub const CURRENT_SESSION_ID: &str = "current";

    /// MFA challenge endpoint
    pub const MFA_CHALLENGE: &str = "account/mfa/challenge";

    /// Organizations are served by the teams endpoint on the console project
    pub const ORGANIZATIONS: &str = "teams";

    /// Placeholder asking the server to generate an ID
    pub const UNIQUE_ID: &str = "unique()";

    /// Error type returned when a second factor is still pending
    pub const MORE_FACTORS_REQUIRED: &str = "user_more_factors_required";

    /// Default MFA factor used for challenges
    pub const DEFAULT_MFA_FACTOR: &str = "totp";
}

/// Request headers understood by the console API
pub mod headers {
    pub const PROJECT: &str = "X-Appwrite-Project";
    pub const RESPONSE_FORMAT: &str = "X-Appwrite-Response-Format";
}

/// Configuration constants for the local preferences file
pub mod store {
    /// Directory under HOME holding the preferences file
    pub const DIR_NAME: &str = ".consolectl";

    /// Preferences file name
    pub const FILE_NAME: &str = "prefs.json";

    /// Environment variable overriding the preferences file path
    pub const ENV_VAR: &str = "CONSOLECTL_CONFIG";

    /// Current layout version of the preferences file
    pub const CURRENT_VERSION: u32 = 2;

    /// Session key for a login still waiting on its second factor
    pub const PENDING_SESSION_ID: &str = "pending";

    /// Session key used for sessions carried over from the legacy layout
    pub const LEGACY_SESSION_ID: &str = "migrated";
}

/// Default values for CLI
pub mod defaults {
    /// Default console endpoint
    pub const ENDPOINT: &str = "https://cloud.appwrite.io/v1";

    /// Environment variable overriding the endpoint
    pub const ENDPOINT_ENV_VAR: &str = "CONSOLECTL_ENDPOINT";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
