use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("github client error: {0}")]
    Client(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of a single lookup. The `Display` output is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Non-2xx response; carries the server's `message` verbatim.
    #[error("{message}")]
    Api {
        #[allow(dead_code)]
        status: u16,
        message: String,
    },

    #[error("network error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<octocrab::Error> for LookupError {
    fn from(e: octocrab::Error) -> Self {
        LookupError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::Decode(e.to_string())
    }
}
