use thiserror::Error;

/// Failures while talking to the static host. None of these reach the user:
/// the resolver downgrades them to "fall back" or "not found".
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("manifest is not a list of filenames")]
    Malformed(#[source] serde_json::Error),

    #[error("manifest lists no images")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid gallery config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("gallery config lists no file extensions")]
    NoExtensions,

    #[error("gallery config max_files must be at least 1")]
    NoProbeRange,
}
