use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Error type for the wiki application
#[derive(Debug)]
pub enum WikiError {
    Io(io::Error),
    NotFound,
    InvalidTitle,
    Startup(String),
}

impl From<io::Error> for WikiError {
    fn from(err: io::Error) -> Self {
        WikiError::Io(err)
    }
}

impl From<regex::Error> for WikiError {
    fn from(err: regex::Error) -> Self {
        WikiError::Startup(format!("title pattern: {}", err))
    }
}

impl From<log::SetLoggerError> for WikiError {
    fn from(err: log::SetLoggerError) -> Self {
        WikiError::Startup(format!("logger: {}", err))
    }
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        match self {
            // A title failing the allow-list is indistinguishable from a
            // page that does not exist.
            WikiError::NotFound | WikiError::InvalidTitle => {
                (StatusCode::NOT_FOUND, "Not found").into_response()
            }
            WikiError::Io(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("I/O error: {}", e),
            )
                .into_response(),
            WikiError::Startup(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Startup error: {}", e),
            )
                .into_response(),
        }
    }
}
