use std::fmt;

/// Custom error type for console operations
#[derive(Debug)]
pub enum ConsoleError {
    /// Malformed or incomplete option combination, detected before any remote call
    InvalidArgument(String),
    /// No valid session for an operation requiring one
    Unauthenticated(String),
    /// Login accepted the password but a second factor is still pending
    MfaRequired,
    /// The console API returned an error response
    Remote {
        status: u16,
        kind: String,
        message: String,
    },
    /// HTTP request failed
    Http(reqwest::Error),
    /// JSON parsing error
    Json(String),
    /// Local configuration error
    Config(String),
}

impl ConsoleError {
    /// Whether this error was surfaced by the remote collaborator
    pub fn is_remote(&self) -> bool {
        matches!(self, ConsoleError::Remote { .. } | ConsoleError::Http(_))
    }

    /// HTTP status of a remote error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ConsoleError::Remote { status, .. } => Some(*status),
            ConsoleError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            ConsoleError::Unauthenticated(msg) => write!(f, "{}", msg),
            ConsoleError::MfaRequired => write!(
                f,
                "Multi-factor authentication required. Complete the challenge with --mfa-token and --code"
            ),
            ConsoleError::Remote {
                status,
                kind,
                message,
            } => {
                if kind.is_empty() {
                    write!(f, "API error (status {}): {}", status, message)
                } else {
                    write!(f, "API error (status {}, {}): {}", status, kind, message)
                }
            }
            ConsoleError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ConsoleError::Json(msg) => write!(f, "JSON error: {}", msg),
            ConsoleError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        ConsoleError::Http(err)
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::Json(err.to_string())
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Config(err.to_string())
    }
}

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
