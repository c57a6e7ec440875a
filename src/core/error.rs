use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Caller identity is missing or cannot be interpreted
    #[error("Access error: {0}")]
    Access(String),

    /// Admin caller but the location table is empty
    #[error("No locations configured")]
    NoLocationsConfigured,

    /// Non-admin caller with no assigned locations
    #[error("No locations assigned to user {0}")]
    NoLocationsAssigned(i64),

    /// No fact rows exist for the authorized locations, so no reference
    /// date can be established for bucketing
    #[error("No data available")]
    NoDataAvailable,

    /// Malformed filter input from the presentation layer
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        HttpResponse::build(status_code).json(serde_json::json!({
            "status": "error",
            "message": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Access(_) => StatusCode::BAD_REQUEST,
            AppError::NoLocationsConfigured => StatusCode::BAD_REQUEST,
            AppError::NoLocationsAssigned(_) => StatusCode::BAD_REQUEST,
            AppError::NoDataAvailable => StatusCode::NOT_FOUND,
            AppError::InvalidFilter(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper constructors for common error scenarios
impl AppError {
    pub fn access(msg: impl Into<String>) -> Self {
        AppError::Access(msg.into())
    }

    pub fn invalid_filter(msg: impl Into<String>) -> Self {
        AppError::InvalidFilter(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
