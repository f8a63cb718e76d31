use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("{field} must be a valid number")]
    InvalidNumber { field: String },

    #[error("{field} must be {bound}")]
    OutOfRange { field: String, bound: String },

    #[error("Authentication token not found. Please login first.")]
    AuthenticationRequired,

    #[error("Session expired. Please login again.")]
    SessionExpired,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
