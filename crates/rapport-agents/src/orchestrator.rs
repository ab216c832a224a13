//! Orchestrator wrapping the outreach agent with a per-request cache.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use rapport_core::{Archetype, ContactId, RequestId, Timestamp};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::agent::{AgentConfig, AgentResult};
use crate::backend::{CompletionBackend, OfflineBackend};
use crate::outreach::{OutreachAgent, OutreachInput, DEFAULT_VARIANTS};
use crate::prompts::DraftMessage;

/// Default number of cached drafts
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Generated outreach for one request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachDraft {
    pub request_id: RequestId,
    pub contact_id: Option<ContactId>,
    pub timestamp: Timestamp,
    pub archetype: Archetype,
    pub messages: Vec<DraftMessage>,
}

/// Drafts keyed by request, evicted in insertion order
#[derive(Debug, Default)]
struct DraftCache {
    entries: HashMap<RequestId, OutreachDraft>,
    order: VecDeque<RequestId>,
}

impl DraftCache {
    fn get(&self, request_id: &RequestId) -> Option<&OutreachDraft> {
        self.entries.get(request_id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert a draft, dropping the earliest-inserted entries beyond `capacity`
    fn insert(&mut self, draft: OutreachDraft, capacity: usize) {
        let request_id = draft.request_id;
        if self.entries.insert(request_id, draft).is_none() {
            self.order.push_back(request_id);
        }

        while self.entries.len() > capacity {
            match self.order.pop_front() {
                Some(oldest) => {
                    self.entries.remove(&oldest);
                    tracing::debug!("Evicted cached draft for request {}", oldest);
                }
                None => break,
            }
        }
    }

    fn remove(&mut self, request_id: &RequestId) {
        if self.entries.remove(request_id).is_some() {
            self.order.retain(|id| id != request_id);
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

/// Outreach orchestrator
pub struct OutreachOrchestrator {
    agent: OutreachAgent,
    capacity: usize,

    /// Cache of generated drafts
    cache: RwLock<DraftCache>,
}

impl OutreachOrchestrator {
    pub fn new(config: AgentConfig, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            agent: OutreachAgent::new(config, backend).with_variants(DEFAULT_VARIANTS),
            capacity: DEFAULT_CACHE_CAPACITY,
            cache: RwLock::new(DraftCache::default()),
        }
    }

    pub fn with_variants(mut self, variants: usize) -> Self {
        self.agent = self.agent.with_variants(variants);
        self
    }

    /// Cache capacity. Zero disables caching.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Generate outreach drafts for a request
    pub async fn generate(
        &self,
        request_id: RequestId,
        contact_id: Option<ContactId>,
        input: &OutreachInput,
    ) -> AgentResult<OutreachDraft> {
        // Check cache first
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.get(&request_id) {
                tracing::debug!("Cache hit for request {}", request_id);
                return Ok(cached.clone());
            }
        }

        tracing::info!("Generating outreach for request {}", request_id);

        let output = self.agent.generate(input).await?;

        tracing::info!(
            "Request {}: archetype {}, {} messages",
            request_id,
            output.archetype,
            output.messages.len()
        );

        let draft = OutreachDraft {
            request_id,
            contact_id,
            timestamp: Timestamp::now(),
            archetype: output.archetype,
            messages: output.messages,
        };

        if self.capacity > 0 {
            let mut cache = self.cache.write().await;
            cache.insert(draft.clone(), self.capacity);
        }

        Ok(draft)
    }

    /// Get cached draft for a request
    pub async fn get_draft(&self, request_id: RequestId) -> Option<OutreachDraft> {
        let cache = self.cache.read().await;
        cache.get(&request_id).cloned()
    }

    /// Clear cache entry
    pub async fn clear_request(&self, request_id: RequestId) {
        let mut cache = self.cache.write().await;
        cache.remove(&request_id);
    }

    /// Clear all cached drafts
    pub async fn clear_all(&self) {
        let mut cache = self.cache.write().await;
        cache.clear();
    }

    /// Get cache statistics
    pub async fn cache_stats(&self) -> CacheStats {
        let cache = self.cache.read().await;
        CacheStats {
            cached_requests: cache.len(),
            capacity: self.capacity,
        }
    }
}

impl Default for OutreachOrchestrator {
    fn default() -> Self {
        Self::new(AgentConfig::default(), Arc::new(OfflineBackend::new()))
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub cached_requests: usize,
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapport_core::{BusinessProfile, ContactSummary, CoreDesire, CoreFear};

    fn input() -> OutreachInput {
        let mut input = OutreachInput::new(BusinessProfile::new("Northwind"), ContactSummary::new("Dana Reyes"));
        input.core_desire = Some(CoreDesire::Breakthrough);
        input.core_fear = Some(CoreFear::MissingConnections);
        input
    }

    #[tokio::test]
    async fn test_orchestrator_pipeline() {
        let orchestrator = OutreachOrchestrator::default();
        let request_id = RequestId::new();
        let contact_id = ContactId::new();

        let draft = orchestrator
            .generate(request_id, Some(contact_id), &input())
            .await
            .unwrap();

        // Tie between dreamer and lover resolves to dreamer
        assert_eq!(draft.archetype, Archetype::Dreamer);
        assert_eq!(draft.messages.len(), DEFAULT_VARIANTS);
        assert_eq!(draft.contact_id, Some(contact_id));

        // Verify caching
        let cached = orchestrator.get_draft(request_id).await.unwrap();
        assert_eq!(cached.timestamp, draft.timestamp);

        let again = orchestrator.generate(request_id, None, &input()).await.unwrap();
        assert_eq!(again.timestamp, draft.timestamp);
    }

    #[tokio::test]
    async fn test_cache_eviction() {
        let orchestrator = OutreachOrchestrator::default().with_cache_capacity(2);
        let first = RequestId::new();

        orchestrator.generate(first, None, &input()).await.unwrap();
        orchestrator.generate(RequestId::new(), None, &input()).await.unwrap();
        orchestrator.generate(RequestId::new(), None, &input()).await.unwrap();

        let stats = orchestrator.cache_stats().await;
        assert_eq!(stats.cached_requests, 2);
        assert!(orchestrator.get_draft(first).await.is_none());
    }

    #[test]
    fn test_eviction_follows_insertion_order() {
        // Identical timestamps leave insertion order as the only tie-break
        let timestamp = Timestamp::from_nanos(1_700_000_000_000_000_000);
        let draft = |request_id| OutreachDraft {
            request_id,
            contact_id: None,
            timestamp,
            archetype: Archetype::Boss,
            messages: Vec::new(),
        };

        let ids: Vec<RequestId> = (0..4).map(|_| RequestId::new()).collect();
        let mut cache = DraftCache::default();
        for id in &ids[..3] {
            cache.insert(draft(*id), 3);
        }

        // Re-inserting an existing request keeps its original position
        cache.insert(draft(ids[0]), 3);
        cache.insert(draft(ids[3]), 3);

        assert_eq!(cache.len(), 3);
        assert!(cache.get(&ids[0]).is_none());
        assert!(ids[1..].iter().all(|id| cache.get(id).is_some()));

        cache.remove(&ids[1]);
        cache.insert(draft(RequestId::new()), 2);
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&ids[2]).is_none());
        assert!(cache.get(&ids[3]).is_some());
    }

    #[tokio::test]
    async fn test_cache_disabled() {
        let orchestrator = OutreachOrchestrator::default().with_cache_capacity(0);
        let request_id = RequestId::new();

        orchestrator.generate(request_id, None, &input()).await.unwrap();
        assert!(orchestrator.get_draft(request_id).await.is_none());
    }

    #[tokio::test]
    async fn test_clear() {
        let orchestrator = OutreachOrchestrator::default();
        let a = RequestId::new();
        let b = RequestId::new();

        orchestrator.generate(a, None, &input()).await.unwrap();
        orchestrator.generate(b, None, &input()).await.unwrap();

        orchestrator.clear_request(a).await;
        assert!(orchestrator.get_draft(a).await.is_none());
        assert!(orchestrator.get_draft(b).await.is_some());

        orchestrator.clear_all().await;
        assert_eq!(orchestrator.cache_stats().await.cached_requests, 0);
    }
}
