//! Completion backends.
//!
//! The copywriter talks to a language model through [`CompletionBackend`].
//! Real network clients live outside this crate; the backends here run
//! in-process.

use async_trait::async_trait;
use rapport_core::Archetype;
use serde::{Deserialize, Serialize};

use crate::agent::{AgentConfig, AgentError, AgentResult};
use crate::prompts::DraftMessage;

/// A single chat-completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: usize,
    pub top_p: f32,
    /// Resolved archetype of the recipient, when the caller classified one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetype: Option<Archetype>,
    /// Recipient display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

impl CompletionRequest {
    pub fn new(config: &AgentConfig, system: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: config.model.clone(),
            system: system.into(),
            prompt: prompt.into(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
            archetype: None,
            recipient: None,
        }
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    pub fn with_recipient(mut self, name: impl Into<String>) -> Self {
        self.recipient = Some(name.into());
        self
    }
}

/// Text-generation backend
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    fn name(&self) -> &str;

    /// Return the raw model reply for a request
    async fn complete(&self, request: &CompletionRequest) -> AgentResult<String>;
}

/// Deterministic local drafts, no model involved.
///
/// Drafts follow the request's `archetype` and `recipient` fields. The prompt
/// text is never inspected, so user-supplied notes cannot steer the angle.
#[derive(Debug, Clone, Default)]
pub struct OfflineBackend;

impl OfflineBackend {
    pub fn new() -> Self {
        Self
    }

    fn angle(archetype: Archetype) -> &'static str {
        match archetype {
            Archetype::Dreamer => "I keep thinking about the breakthrough you're working toward and wanted to share an idea that could help you get there.",
            Archetype::Lover => "I'd love to connect you with a few people in our community who are working on the same things you are.",
            Archetype::Scholar => "I put together a short comparison with the numbers behind it, so you can weigh the options on your own terms.",
            Archetype::Boss => "I have a specific way to save your team a few hours a week, and I can walk you through it in 15 minutes.",
            Archetype::Balanced => "I have an idea that could help you grow, with a couple of examples and people worth meeting along the way.",
        }
    }
}

#[async_trait]
impl CompletionBackend for OfflineBackend {
    fn name(&self) -> &str {
        "offline"
    }

    async fn complete(&self, request: &CompletionRequest) -> AgentResult<String> {
        let first_name = request
            .recipient
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or("there");
        let angle = Self::angle(request.archetype.unwrap_or(Archetype::Balanced));

        let messages = vec![
            DraftMessage {
                subject: Some(format!("An idea for you, {}", first_name)),
                body: format!("Hi {}, {} Would you be open to a quick chat this week?", first_name, angle),
            },
            DraftMessage {
                subject: Some("Quick follow-up".to_string()),
                body: format!("{}, {} Let me know if a short call works for you.", first_name, angle),
            },
            DraftMessage {
                subject: None,
                body: format!("Hey {}! {}", first_name, angle),
            },
        ];

        serde_json::to_string(&serde_json::json!({ "messages": messages }))
            .map_err(|e| AgentError::LlmError(e.to_string()))
    }
}

/// Backend returning a fixed reply or failure
#[derive(Debug, Clone)]
pub struct ScriptedBackend {
    reply: Result<String, String>,
}

impl ScriptedBackend {
    pub fn reply(text: impl Into<String>) -> Self {
        Self { reply: Ok(text.into()) }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
        }
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, _request: &CompletionRequest) -> AgentResult<String> {
        self.reply.clone().map_err(AgentError::LlmError)
    }
}
