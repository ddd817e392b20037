use std::path::PathBuf;

/// All errors that can occur while loading leaderboard data.
///
/// The scoring, classification, sorting and filtering functions never fail;
/// errors only come from the data store, the reference files and configuration.
#[derive(thiserror::Error, Debug)]
pub enum GpError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A response or reference document was not the expected JSON shape.
    #[error("failed to decode json from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A local reference file could not be read.
    #[error("failed to read reference file {}: {source}", path.display())]
    ReadReference {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A `YYYYMM` period string was malformed.
    #[error("invalid year-month: {0:?}")]
    InvalidYearMonth(String),

    /// A required environment variable is not set.
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),
}

pub type Result<T> = std::result::Result<T, GpError>;
