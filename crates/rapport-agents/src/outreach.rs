//! Outreach copywriter: classify the recipient, assemble the prompt, draft messages.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rapport_core::{
    format_history, Archetype, BusinessProfile, ContactSummary, CoreDesire, CoreFear, Interaction, MessageType,
    MotivationProfile, ScoreTable, Tone,
};
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentConfig, AgentError, AgentResult};
use crate::backend::{CompletionBackend, CompletionRequest, OfflineBackend};
use crate::emphasis::describe;
use crate::prompts::{format_outreach_input, parse_message_response, DraftMessage, OutreachPromptParts, OUTREACH_SYSTEM_PROMPT};

/// Interactions rendered into the prompt
pub const HISTORY_LIMIT: usize = 5;

/// Default number of variants requested
pub const DEFAULT_VARIANTS: usize = 3;

/// Outreach Agent input
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachInput {
    pub business: BusinessProfile,
    pub contact: ContactSummary,
    #[serde(default)]
    pub history: Vec<Interaction>,
    #[serde(default)]
    pub message_type: MessageType,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub core_desire: Option<CoreDesire>,
    #[serde(default)]
    pub core_fear: Option<CoreFear>,
    #[serde(default)]
    pub extra_context: Option<String>,
}

impl OutreachInput {
    pub fn new(business: BusinessProfile, contact: ContactSummary) -> Self {
        Self {
            business,
            contact,
            history: Vec::new(),
            message_type: MessageType::default(),
            tone: Tone::default(),
            core_desire: None,
            core_fear: None,
            extra_context: None,
        }
    }

    fn validate(&self) -> AgentResult<()> {
        if self.contact.name.trim().is_empty() {
            return Err(AgentError::InvalidInput("Contact name is required".to_string()));
        }
        if self.business.business_name.trim().is_empty() {
            return Err(AgentError::InvalidInput("Business name is required".to_string()));
        }
        Ok(())
    }
}

/// Outreach Agent output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachOutput {
    pub archetype: Archetype,
    pub scores: ScoreTable,
    pub messages: Vec<DraftMessage>,
    /// Length of the assembled user prompt
    pub prompt_chars: usize,
}

/// Outreach Agent implementation
pub struct OutreachAgent {
    config: AgentConfig,
    backend: Arc<dyn CompletionBackend>,
    variants: usize,
    name: String,
}

impl OutreachAgent {
    pub fn new(config: AgentConfig, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            config,
            backend,
            variants: DEFAULT_VARIANTS,
            name: "Outreach".to_string(),
        }
    }

    /// Number of variants to request and keep. Clamped to at least one.
    pub fn with_variants(mut self, variants: usize) -> Self {
        self.variants = variants.max(1);
        self
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Assemble the user prompt for an input
    pub fn build_prompt(&self, input: &OutreachInput, profile: &MotivationProfile) -> String {
        let business = input.business.summary();
        let contact = input.contact.summary();
        let history = format_history(&input.history, HISTORY_LIMIT);
        let psychology = describe(profile.archetype).render();

        format_outreach_input(&OutreachPromptParts {
            business: &business,
            contact: &contact,
            history: &history,
            goal: input.message_type.purpose(),
            tone: input.tone.style(),
            psychology: &psychology,
            extra_context: input.extra_context.as_deref(),
            variants: self.variants,
        })
    }

    /// Generate draft messages for one contact
    pub async fn generate(&self, input: &OutreachInput) -> AgentResult<OutreachOutput> {
        input.validate()?;

        let profile = MotivationProfile::from_signals(input.core_desire, input.core_fear);
        tracing::debug!("{}", profile.summary());

        let prompt = self.build_prompt(input, &profile);
        let request = CompletionRequest::new(&self.config, OUTREACH_SYSTEM_PROMPT, prompt)
            .with_archetype(profile.archetype)
            .with_recipient(input.contact.name.trim());

        let reply = tokio::time::timeout(
            Duration::from_millis(self.config.timeout_ms),
            self.backend.complete(&request),
        )
        .await
        .map_err(|_| AgentError::Timeout(self.config.timeout_ms))??;

        let mut messages = parse_message_response(&reply)?;
        if messages.len() > self.variants {
            messages.truncate(self.variants);
        }

        tracing::debug!(
            "{} backend returned {} messages for {} archetype",
            self.backend.name(),
            messages.len(),
            profile.archetype
        );

        Ok(OutreachOutput {
            archetype: profile.archetype,
            scores: profile.scores,
            messages,
            prompt_chars: request.prompt.chars().count(),
        })
    }
}

impl Default for OutreachAgent {
    fn default() -> Self {
        Self::new(AgentConfig::default(), Arc::new(OfflineBackend::new()))
    }
}

#[async_trait]
impl Agent for OutreachAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn process(&self, input: &str) -> AgentResult<String> {
        self.validate_input(input)?;

        let input: OutreachInput =
            serde_json::from_str(input).map_err(|e| AgentError::InvalidInput(e.to_string()))?;
        let output = self.generate(&input).await?;

        serde_json::to_string(&output).map_err(|e| AgentError::PromptError(e.to_string()))
    }
}
