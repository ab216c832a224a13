//! JSON request and response bodies for message generation.

use rapport_agents::{DraftMessage, OutreachInput};
use rapport_core::{
    Archetype, BusinessProfile, ContactId, ContactSummary, CoreDesire, CoreFear, Interaction, MessageType,
    RequestId, Tone,
};
use serde::{Deserialize, Serialize};

/// Body of a generate-message request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMessageRequest {
    #[serde(default)]
    pub contact_id: Option<ContactId>,
    pub contact: ContactSummary,
    pub business: BusinessProfile,
    #[serde(default)]
    pub history: Vec<Interaction>,
    #[serde(default)]
    pub message_type: MessageType,
    #[serde(default)]
    pub tone: Tone,
    /// Free-form; unrecognized values are ignored
    #[serde(default)]
    pub core_desire: Option<String>,
    /// Free-form; unrecognized values are ignored
    #[serde(default)]
    pub core_fear: Option<String>,
    #[serde(default)]
    pub additional_context: Option<String>,
}

impl GenerateMessageRequest {
    pub fn desire(&self) -> Option<CoreDesire> {
        let raw = self.core_desire.as_deref()?;
        let parsed = CoreDesire::from_wire(raw);
        if parsed.is_none() {
            tracing::debug!("Ignoring unrecognized coreDesire value {:?}", raw);
        }
        parsed
    }

    pub fn fear(&self) -> Option<CoreFear> {
        let raw = self.core_fear.as_deref()?;
        let parsed = CoreFear::from_wire(raw);
        if parsed.is_none() {
            tracing::debug!("Ignoring unrecognized coreFear value {:?}", raw);
        }
        parsed
    }

    pub fn into_input(self) -> OutreachInput {
        let core_desire = self.desire();
        let core_fear = self.fear();

        OutreachInput {
            business: self.business,
            contact: self.contact,
            history: self.history,
            message_type: self.message_type,
            tone: self.tone,
            core_desire,
            core_fear,
            extra_context: self.additional_context,
        }
    }
}

/// Body of a generate-message response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMessageResponse {
    pub request_id: RequestId,
    pub archetype: Archetype,
    pub messages: Vec<DraftMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "contact": {"name": "Dana Reyes", "company": "Acme", "relationshipStage": "warm"},
        "business": {"businessName": "Northwind Coaching", "industry": "Coaching"},
        "history": [
            {"channel": "linkedin", "summary": "Met at SaaStr", "occurredAt": "2024-03-01T10:00:00Z"}
        ],
        "messageType": "follow_up",
        "coreDesire": "achieve_goals",
        "coreFear": "wasting_time"
    }"#;

    #[test]
    fn test_parse_full_body() {
        let request: GenerateMessageRequest = serde_json::from_str(BODY).unwrap();
        assert_eq!(request.message_type, MessageType::FollowUp);
        assert_eq!(request.tone, Tone::Professional);
        assert_eq!(request.history.len(), 1);

        let input = request.into_input();
        assert_eq!(input.core_desire, Some(CoreDesire::AchieveGoals));
        assert_eq!(input.core_fear, Some(CoreFear::WastingTime));
        assert_eq!(input.contact.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_unknown_signals_are_dropped() {
        let body = r#"{
            "contact": {"name": "Sam"},
            "business": {"businessName": "Northwind"},
            "coreDesire": "fame_and_fortune",
            "coreFear": "not_sure"
        }"#;

        let input: OutreachInput = serde_json::from_str::<GenerateMessageRequest>(body).unwrap().into_input();
        assert_eq!(input.core_desire, None);
        assert_eq!(input.core_fear, Some(CoreFear::NotSure));
    }

    #[test]
    fn test_missing_contact_rejected() {
        let body = r#"{"business": {"businessName": "Northwind"}}"#;
        assert!(serde_json::from_str::<GenerateMessageRequest>(body).is_err());
    }
}
