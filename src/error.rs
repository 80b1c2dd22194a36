use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Required settings are missing (city/country in city mode)
    ConfigError(String),
    /// Geolocation failed and no configured fallback exists
    LocationError(String),
    /// Transport failure or an embedded non-200 status from a remote call
    ApiError(String),
    IoError(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::LocationError(msg) => write!(f, "Location error: {}", msg),
            AppError::ApiError(msg) => write!(f, "API error: {}", msg),
            AppError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<ureq::Error> for AppError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => AppError::ApiError(format!("HTTP error: {}", code)),
            ureq::Error::Transport(t) => AppError::ApiError(format!("Network error: {}", t)),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ApiError(format!("Could not parse response: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
