//! Base agent trait and common types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result type for agent operations
pub type AgentResult<T> = Result<T, AgentError>;

/// Agent error types
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("LLM inference error: {0}")]
    LlmError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Prompt template error: {0}")]
    PromptError(String),

    #[error("Malformed model response: {0}")]
    ResponseFormat(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Agent not initialized")]
    NotInitialized,
}

impl From<AgentError> for rapport_core::Error {
    fn from(e: AgentError) -> Self {
        match e {
            AgentError::InvalidInput(msg) => rapport_core::Error::InvalidInput(msg),
            AgentError::Timeout(ms) => rapport_core::Error::Timeout { duration_ms: ms },
            AgentError::LlmError(msg) => rapport_core::Error::Backend(msg),
            other => rapport_core::Error::Agent(other.to_string()),
        }
    }
}

/// Base trait for all agents
#[async_trait]
pub trait Agent: Send + Sync {
    /// Agent name/identifier
    fn name(&self) -> &str;

    /// Process a JSON-encoded input and return a JSON-encoded output
    async fn process(&self, input: &str) -> AgentResult<String>;

    /// Optional: validate input before processing
    fn validate_input(&self, input: &str) -> AgentResult<()> {
        if input.trim().is_empty() {
            Err(AgentError::InvalidInput("Empty input".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Agent configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model to use (e.g., "gpt-4o-mini")
    pub model: String,
    /// Temperature for generation (0.0-2.0)
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: usize,
    /// Top-p sampling
    pub top_p: f32,
    /// Timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 800,
            top_p: 0.9,
            timeout_ms: 30_000,
        }
    }
}
