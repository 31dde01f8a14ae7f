use contracts::usecases::u508_compare_rows::{DownloadType, ErrorBody};
use thiserror::Error;

/// Shown in the error panel for any transport failure of `/process`
pub const PROCESS_FAILED_MESSAGE: &str =
    "An error occurred while processing the files. Please check the browser console for more details.";

/// Shown in the error panel when a download could not be saved
pub fn download_failed_message(kind: DownloadType) -> String {
    format!(
        "Failed to download {}. Please check the browser console for more details.",
        kind.file_name()
    )
}

/// Transport-level failure of a request.
///
/// The detail is for the browser console only. Users see one of the fixed
/// messages above.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request could not be constructed: {0}")]
    Request(String),
    #[error("request sent but no response received: {0}")]
    NoResponse(String),
    #[error("server responded with HTTP {status}")]
    Status { status: u16, body: String },
    #[error("response could not be decoded: {0}")]
    Decode(String),
}

impl ApiError {
    /// Operator-facing description including the server's error text, if any
    pub fn diagnostic(&self) -> String {
        match self {
            ApiError::Status { status, body } => {
                if let Some(error) = ErrorBody::parse(body) {
                    format!("server responded with HTTP {}: {}", status, error)
                } else if body.trim().is_empty() {
                    format!("server responded with HTTP {} and an empty body", status)
                } else {
                    format!("server responded with HTTP {}: {}", status, body.trim())
                }
            }
            other => other.to_string(),
        }
    }
}
