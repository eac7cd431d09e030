use core::fmt;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Connection(String),
    Io(std::io::Error),
    NotFound(String),
    Serialization(serde_json::Error),
    Validation(String),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err)
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("invalid url: {}", err))
    }
}

// A 404 from the backend means the record is gone remotely, every other
// failure is treated as the server being unreachable or refusing the request.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(StatusCode::NOT_FOUND) => AppError::NotFound(
                err.url()
                    .map(|u| u.path().to_string())
                    .unwrap_or_else(|| "Resource".to_string()),
            ),
            _ => AppError::Connection(err.to_string()),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            AppError::Connection(msg) => {
                write!(f, "Could not reach the server: {}", msg)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Serialization(e) => {
                write!(f, "Malformed data: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}
