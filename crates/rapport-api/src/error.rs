//! Request-level errors.

use rapport_agents::AgentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Generation failed: {0}")]
    Generation(#[from] AgentError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status an outer server layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Config(_) => 500,
            ApiError::Generation(AgentError::InvalidInput(_)) => 400,
            ApiError::Generation(AgentError::Timeout(_)) => 504,
            ApiError::Generation(AgentError::RateLimit) => 429,
            ApiError::Generation(AgentError::LlmError(_) | AgentError::ResponseFormat(_)) => 502,
            ApiError::Generation(_) => 500,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
