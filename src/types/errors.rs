use std::fmt;

// === ApiError ===

/// Errors returned by the bookmark REST API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS).
    Network(String),
    /// The server answered with a non-success status.
    Status { status: u16, message: String },
    /// The server refused the request and said why in an `error` field.
    Rejected(String),
    /// The response body could not be decoded.
    Decode(String),
    /// The configured base URL or a derived endpoint is not a valid URL.
    InvalidUrl(String),
}

impl ApiError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected(msg) => msg.clone(),
            _ => "Failed to create bookmark".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "API network error: {}", msg),
            ApiError::Status { status, message } => {
                write!(f, "API returned status {}: {}", status, message)
            }
            ApiError::Rejected(msg) => write!(f, "API rejected request: {}", msg),
            ApiError::Decode(msg) => write!(f, "API response decode error: {}", msg),
            ApiError::InvalidUrl(url) => write!(f, "Invalid API URL: {}", url),
        }
    }
}

impl std::error::Error for ApiError {}

// === SettingsError ===

/// Errors related to client settings.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === CommandError ===

/// Errors from parsing a terminal command line.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognised.
    Unknown(String),
    /// The command needs an argument that was not given.
    MissingArgument(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(cmd) => {
                write!(f, "Unknown command: {} (type 'help')", cmd)
            }
            CommandError::MissingArgument(cmd) => {
                write!(f, "Missing argument for command: {}", cmd)
            }
        }
    }
}

impl std::error::Error for CommandError {}
