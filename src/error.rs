//! Error types for the Care2Connect client

use thiserror::Error;

/// Result type alias for Care2Connect operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Login failed; carries the message shown to the user
    #[error("{0}")]
    Login(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Backend API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Not signed in or session expired. Run `c2c login` to sign in.")]
    Unauthorized,

    #[error("Access denied. Your role does not permit this action.")]
    Forbidden,

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Rejected by server: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Authorization failures. Every variant resolves to a redirect to `/login`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Not signed in. Run `c2c login` to sign in.")]
    NotSignedIn,

    #[error("Session expired and no refresh token is available. Run `c2c login`.")]
    AuthExpired,

    #[error("Session refresh was rejected by the server. Run `c2c login`.")]
    RefreshRejected,

    #[error("Stored access token is malformed: {0}")]
    MalformedToken(String),

    #[error("Could not reach the server to refresh the session: {0}")]
    Network(String),

    #[error("Server unavailable while refreshing the session: {0}")]
    ServerUnavailable(String),

    #[error("Session store unavailable: {0}")]
    Storage(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Session store errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Could not determine home directory for the session file")]
    NoHome,

    #[error("Failed to read session: {0}")]
    Read(String),

    #[error("Failed to write session: {0}")]
    Write(String),

    #[error("Stored role groups are not valid JSON: {0}")]
    Groups(String),
}
