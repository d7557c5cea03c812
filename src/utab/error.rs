use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtabError {
    /// Transport failure, timeout, non-success status or an undecodable
    /// payload. All are surfaced identically as "request failed".
    #[error("Request failed: {0}")]
    Fetch(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, UtabError>;
