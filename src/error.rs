//! Error handling

use std::path::PathBuf;

/// Error definitions for the illustrate pipeline.
///
/// Only [IllustrateError::InputRead] and [IllustrateError::FileWrite] are
/// fatal to a run; everything else is caught, logged and skipped by the
/// pipeline.
#[derive(Debug)]
pub enum IllustrateError {
    /// A required input file could not be read.
    InputRead(PathBuf, std::io::Error),
    /// An output file could not be written.
    FileWrite(PathBuf, std::io::Error),
    /// The remote service answered with a non-success HTTP status.
    Http {
        /// What was being requested when the status came back.
        what: String,
        /// The status the service returned.
        status: reqwest::StatusCode,
        /// Response body, for the logs.
        body: String,
    },
    /// A connection could not be established.
    Connect(reqwest::Error),
    /// The request timed out.
    Timeout(reqwest::Error),
    /// Any other failure while sending a request or reading its body.
    Request(reqwest::Error),
    /// A response body was not the JSON shape we expected.
    MalformedResponse(String),
    /// The image response carried neither a URL nor inline image data.
    MissingImagePayload,
    /// Inline base64 image data could not be decoded.
    ImageDecode(base64::DecodeError),
}

impl std::fmt::Display for IllustrateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputRead(path, err) => {
                write!(f, "Failed to read {}: {err}", path.display())
            }
            Self::FileWrite(path, err) => {
                write!(f, "Failed to write {}: {err}", path.display())
            }
            Self::Http { what, status, body } => {
                write!(f, "Http error {status} from {what}: {body}")
            }
            Self::Connect(err) => write!(f, "Error connecting: {err}"),
            Self::Timeout(err) => write!(f, "Timeout error: {err}"),
            Self::Request(err) => write!(f, "Request error: {err}"),
            Self::MalformedResponse(message) => {
                write!(f, "Malformed service response: {message}")
            }
            Self::MissingImagePayload => {
                write!(f, "Image response missing both url and b64_json fields")
            }
            Self::ImageDecode(err) => write!(f, "Failed to base64-decode image: {err}"),
        }
    }
}

impl std::error::Error for IllustrateError {}

impl From<reqwest::Error> for IllustrateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_connect() {
            Self::Connect(err)
        } else {
            Self::Request(err)
        }
    }
}

impl From<serde_json::Error> for IllustrateError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

impl From<base64::DecodeError> for IllustrateError {
    fn from(err: base64::DecodeError) -> Self {
        Self::ImageDecode(err)
    }
}
