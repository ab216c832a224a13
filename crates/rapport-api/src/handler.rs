//! Generate-message request handling.

use std::sync::Arc;

use rapport_agents::{CompletionBackend, OutreachOrchestrator};
use rapport_core::RequestId;

use crate::config::AppConfig;
use crate::error::ApiResult;
use crate::request::{GenerateMessageRequest, GenerateMessageResponse};

/// Shared state for request handlers
pub struct AppState {
    pub config: AppConfig,
    pub orchestrator: OutreachOrchestrator,
}

impl AppState {
    pub fn new(config: AppConfig, backend: Arc<dyn CompletionBackend>) -> Self {
        let orchestrator = OutreachOrchestrator::new(config.agent.clone(), backend)
            .with_variants(config.generation.variants)
            .with_cache_capacity(config.generation.cache_capacity);

        tracing::info!(
            "Outreach generator ready: model {}, {} variants",
            config.agent.model,
            config.generation.variants
        );

        Self { config, orchestrator }
    }
}

/// Handle a JSON generate-message request body
pub async fn handle_generate(state: &AppState, body: &str) -> ApiResult<GenerateMessageResponse> {
    let request: GenerateMessageRequest = serde_json::from_str(body)?;
    generate_message(state, request).await
}

/// Handle an already-decoded request
pub async fn generate_message(state: &AppState, request: GenerateMessageRequest) -> ApiResult<GenerateMessageResponse> {
    let request_id = RequestId::new();
    let contact_id = request.contact_id;
    let input = request.into_input();

    let draft = match state.orchestrator.generate(request_id, contact_id, &input).await {
        Ok(draft) => draft,
        Err(e) => {
            tracing::warn!("Request {} failed: {}", request_id, e);
            return Err(e.into());
        }
    };

    Ok(GenerateMessageResponse {
        request_id: draft.request_id,
        archetype: draft.archetype,
        messages: draft.messages,
    })
}
