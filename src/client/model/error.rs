use thiserror::Error;

/// Failed request to the bot backend.
///
/// `status` is the HTTP status, or 500 when the request never got a usable
/// response. `message` is the backend's `ErrorDto` message when it sent one.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}
