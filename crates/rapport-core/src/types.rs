//! Request-scoped context types for outreach generation.
//!
//! None of these are persisted here; the surrounding application loads them
//! from its own store and hands them over once per generation request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a tracked contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(pub Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier of a single generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Timestamp wrapper with nanosecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_nanos_opt().unwrap_or(0))
    }

    pub fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub fn as_nanos(&self) -> i64 {
        self.0
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.0)
    }
}

/// Sender-side business profile used to ground generated copy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    pub business_name: String,
    #[serde(default)]
    pub industry: Option<String>,
    /// What the business sells or provides
    #[serde(default)]
    pub offering: Option<String>,
    #[serde(default)]
    pub value_proposition: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
}

impl BusinessProfile {
    pub fn new(business_name: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            ..Default::default()
        }
    }

    /// Multi-line summary for prompt assembly. Missing fields are skipped.
    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Business: {}", self.business_name.trim())];

        let optional = [
            ("Industry", &self.industry),
            ("Offering", &self.offering),
            ("Value proposition", &self.value_proposition),
            ("Target audience", &self.target_audience),
        ];
        for (label, value) in optional {
            if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                lines.push(format!("{}: {}", label, v));
            }
        }

        lines.join("\n")
    }
}

/// How far along the relationship with a contact is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipStage {
    /// Never spoken
    #[default]
    Cold,
    /// Some prior contact, no ongoing exchange
    Warm,
    /// Regular back-and-forth
    Active,
    /// Previously active, gone quiet
    Dormant,
}

impl RelationshipStage {
    pub fn hint(&self) -> &'static str {
        match self {
            RelationshipStage::Cold => "No prior relationship. Earn attention quickly and do not presume familiarity.",
            RelationshipStage::Warm => "Some prior contact. Reference the shared touchpoint naturally.",
            RelationshipStage::Active => "Ongoing relationship. Be direct and build on recent conversations.",
            RelationshipStage::Dormant => "Relationship has gone quiet. Reopen gently without guilt or pressure.",
        }
    }
}

/// The recipient of a generated message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSummary {
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub relationship_stage: RelationshipStage,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ContactSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Name: {}", self.name.trim())];

        match (self.role.as_deref(), self.company.as_deref()) {
            (Some(role), Some(company)) => lines.push(format!("Position: {} at {}", role, company)),
            (Some(role), None) => lines.push(format!("Position: {}", role)),
            (None, Some(company)) => lines.push(format!("Company: {}", company)),
            (None, None) => {}
        }

        lines.push(format!("Relationship: {:?}. {}", self.relationship_stage, self.relationship_stage.hint()));

        if let Some(notes) = self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            lines.push(format!("Notes: {}", notes));
        }

        lines.join("\n")
    }
}

/// Outreach channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    #[default]
    Email,
    #[serde(alias = "linkedin")]
    LinkedIn,
    Text,
    Phone,
    InPerson,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::LinkedIn => "LinkedIn",
            Channel::Text => "text message",
            Channel::Phone => "phone call",
            Channel::InPerson => "in person",
        }
    }
}

/// A logged touchpoint with the contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub channel: Channel,
    pub summary: String,
    pub occurred_at: DateTime<Utc>,
}

/// Render the most recent `limit` interactions, newest first.
pub fn format_history(history: &[Interaction], limit: usize) -> String {
    if history.is_empty() || limit == 0 {
        return "No previous interactions logged.".to_string();
    }

    let mut recent: Vec<&Interaction> = history.iter().collect();
    recent.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

    recent
        .into_iter()
        .take(limit)
        .map(|i| format!("- {} via {}: {}", i.occurred_at.format("%Y-%m-%d"), i.channel.label(), i.summary.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// What the generated message is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    #[default]
    Introduction,
    FollowUp,
    Reconnect,
    EventInvite,
    ThankYou,
    Referral,
}

impl MessageType {
    pub fn purpose(&self) -> &'static str {
        match self {
            MessageType::Introduction => "Introduce yourself and open a conversation.",
            MessageType::FollowUp => "Follow up on a previous conversation and propose a next step.",
            MessageType::Reconnect => "Reconnect after a period of silence and rekindle the relationship.",
            MessageType::EventInvite => "Invite the contact to an upcoming event or meeting.",
            MessageType::ThankYou => "Thank the contact sincerely for something specific.",
            MessageType::Referral => "Ask for, or offer, a warm introduction to someone relevant.",
        }
    }
}

/// Voice of the generated message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Casual,
    Enthusiastic,
}

impl Tone {
    pub fn style(&self) -> &'static str {
        match self {
            Tone::Professional => "Polished and respectful. Short sentences, no slang.",
            Tone::Friendly => "Warm and personable while staying businesslike.",
            Tone::Casual => "Relaxed and conversational, as if writing to a peer.",
            Tone::Enthusiastic => "Energetic and upbeat without sounding salesy.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn interaction(day: u32, summary: &str) -> Interaction {
        Interaction {
            channel: Channel::Email,
            summary: summary.to_string(),
            occurred_at: Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_business_summary_skips_missing() {
        let mut profile = BusinessProfile::new("Northwind Coaching");
        profile.industry = Some("Executive coaching".to_string());
        profile.offering = Some("   ".to_string());

        let summary = profile.summary();
        assert!(summary.contains("Business: Northwind Coaching"));
        assert!(summary.contains("Industry: Executive coaching"));
        assert!(!summary.contains("Offering"));
    }

    #[test]
    fn test_contact_summary_position() {
        let mut contact = ContactSummary::new("Dana Reyes");
        contact.role = Some("VP Sales".to_string());
        contact.company = Some("Acme".to_string());

        let summary = contact.summary();
        assert!(summary.contains("Position: VP Sales at Acme"));
        assert!(summary.contains("Relationship: Cold"));
    }

    #[test]
    fn test_history_newest_first_and_limited() {
        let history = vec![
            interaction(1, "intro call"),
            interaction(20, "sent proposal"),
            interaction(10, "coffee chat"),
        ];

        let rendered = format_history(&history, 2);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("sent proposal"));
        assert!(lines[1].contains("coffee chat"));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(format_history(&[], 5), "No previous interactions logged.");
    }

    #[test]
    fn test_wire_names() {
        let stage: RelationshipStage = serde_json::from_str("\"dormant\"").unwrap();
        assert_eq!(stage, RelationshipStage::Dormant);

        let kind: MessageType = serde_json::from_str("\"event_invite\"").unwrap();
        assert_eq!(kind, MessageType::EventInvite);

        let channel: Channel = serde_json::from_str("\"linkedin\"").unwrap();
        assert_eq!(channel, Channel::LinkedIn);
    }
}
