use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by actions and their HTTP helpers
#[derive(Debug, Error)]
pub enum Error {
    /// A required credential was absent or empty at construction
    #[error("Missing \"{0}\" config option")]
    MissingConfig(&'static str),

    /// GET or PUT received a 4xx/5xx status
    #[error("{method} {url} failed with HTTP status {status}")]
    HttpStatus {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] ureq::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("run() not implemented")]
    NotImplemented,

    #[error("Missing \"{0}\" parameter")]
    MissingParameter(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl Error {
    /// Status code carried by an HTTP status error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
