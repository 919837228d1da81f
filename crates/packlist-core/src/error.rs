use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PacklistError {
    #[error("failed to read document: {0}")]
    Document(String),

    #[error("no shipment order number found (looked for label '{label}')")]
    MissingOrderId { label: String },

    #[error("failed to load profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid profile: {0}")]
    ProfileInvalid(String),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
