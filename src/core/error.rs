use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Provider credentials are absent; network operations are disabled
    #[error("Payment provider is not configured: {0}")]
    NotConfigured(String),

    /// Caller-supplied amount violates the positive-amount constraint
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A verification call is missing one of its required fields
    #[error("Missing parameters: {0}")]
    MissingParameters(String),

    /// Refund requested without a payment id
    #[error("Missing payment id for refund")]
    MissingPaymentId,

    /// Validation errors for other caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Rejected at the HTTP edge (webhook signature mismatch)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Payment provider errors, provider message preserved
    #[error("Provider error: {0}")]
    Provider(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            AppError::MissingParameters(_) => StatusCode::BAD_REQUEST,
            AppError::MissingPaymentId => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Provider(_) => StatusCode::BAD_GATEWAY,
            AppError::Json(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn not_configured(msg: impl Into<String>) -> Self {
        AppError::NotConfigured(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        AppError::InvalidAmount(msg.into())
    }

    pub fn missing_parameters(msg: impl Into<String>) -> Self {
        AppError::MissingParameters(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        AppError::Provider(msg.into())
    }
}
