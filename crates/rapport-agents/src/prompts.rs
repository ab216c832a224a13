//! Prompt templates and response parsing for the outreach copywriter.

use serde::{Deserialize, Serialize};

use crate::agent::{AgentError, AgentResult};

/// System prompt for the outreach copywriter
pub const OUTREACH_SYSTEM_PROMPT: &str = r#"You are an expert relationship-building copywriter. Your role is to write short, personal outreach messages that a professional sends to someone in their network.

You will receive:
1. The sender's business profile
2. The contact's profile and relationship stage
3. Recent interactions with the contact
4. The goal of the message and the desired tone
5. Buyer psychology directives describing how to weight the message

Rules:
- Sound like a real person, never like a template or an advertisement
- Reference specifics from the contact profile and history when available
- Follow the buyer psychology directives for emphasis
- Keep each message under 150 words
- Never invent facts about the contact

Respond with JSON only, in exactly this shape:
{"messages": [{"subject": "optional subject line", "body": "message text"}]}"#;

/// One generated message variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    messages: Vec<DraftMessage>,
}

/// Sections spliced into the copywriter prompt
#[derive(Debug, Clone, Copy)]
pub struct OutreachPromptParts<'a> {
    pub business: &'a str,
    pub contact: &'a str,
    pub history: &'a str,
    pub goal: &'a str,
    pub tone: &'a str,
    pub psychology: &'a str,
    pub extra_context: Option<&'a str>,
    pub variants: usize,
}

/// Template for the copywriter user prompt
pub fn format_outreach_input(parts: &OutreachPromptParts<'_>) -> String {
    let extra = parts
        .extra_context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("None provided.");

    format!(
        r#"=== OUTREACH MESSAGE GENERATION ===

Sender:
{}

Contact:
{}

Recent Interactions:
{}

Message Goal:
{}

Tone:
{}

{}

Additional Context:
{}

Write {} distinct message variant(s). Respond with JSON only."#,
        parts.business,
        parts.contact,
        parts.history,
        parts.goal,
        parts.tone,
        parts.psychology,
        extra,
        parts.variants
    )
}

fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag line, e.g. ```json
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

fn parse_numbered_lines(response: &str) -> Vec<DraftMessage> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("Message "))
        .filter_map(|line| line.split_once(':').map(|(_, body)| body.trim()))
        .filter(|body| !body.is_empty())
        .map(|body| DraftMessage {
            subject: None,
            body: body.to_string(),
        })
        .collect()
}

/// Parse the copywriter response into draft messages.
///
/// Accepts bare JSON, fenced JSON, JSON embedded in prose, and as a last
/// resort `Message N: ...` lines.
pub fn parse_message_response(response: &str) -> AgentResult<Vec<DraftMessage>> {
    let body = strip_code_fence(response);

    let parsed = serde_json::from_str::<MessageEnvelope>(body).or_else(|first_err| {
        extract_json_object(body)
            .ok_or(first_err)
            .and_then(serde_json::from_str::<MessageEnvelope>)
    });

    let messages = match parsed {
        Ok(envelope) => envelope.messages,
        Err(e) => {
            let fallback = parse_numbered_lines(response);
            if fallback.is_empty() {
                return Err(AgentError::ResponseFormat(e.to_string()));
            }
            tracing::warn!("Model response was not JSON; recovered {} line-based messages", fallback.len());
            fallback
        }
    };

    let messages: Vec<DraftMessage> = messages
        .into_iter()
        .filter(|m| !m.body.trim().is_empty())
        .map(|m| DraftMessage {
            subject: m.subject.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            body: m.body.trim().to_string(),
        })
        .collect();

    if messages.is_empty() {
        Err(AgentError::ResponseFormat("No messages found in response".to_string()))
    } else {
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> OutreachPromptParts<'static> {
        OutreachPromptParts {
            business: "Business: Northwind Coaching",
            contact: "Name: Dana Reyes",
            history: "No previous interactions logged.",
            goal: "Introduce yourself and open a conversation.",
            tone: "Polished and respectful.",
            psychology: "=== BUYER PSYCHOLOGY ===\nArchetype: The Boss",
            extra_context: None,
            variants: 3,
        }
    }

    #[test]
    fn test_format_outreach_input() {
        let prompt = format_outreach_input(&parts());

        assert!(prompt.contains("Northwind Coaching"));
        assert!(prompt.contains("Dana Reyes"));
        assert!(prompt.contains("Archetype: The Boss"));
        assert!(prompt.contains("Additional Context:\nNone provided."));
        assert!(prompt.contains("Write 3 distinct"));
    }

    #[test]
    fn test_format_is_deterministic() {
        assert_eq!(format_outreach_input(&parts()), format_outreach_input(&parts()));
    }

    #[test]
    fn test_parse_plain_json() {
        let response = r#"{"messages":[{"subject":"Quick idea","body":"Hi Dana, ..."},{"body":"Second"}]}"#;
        let messages = parse_message_response(response).unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].subject.as_deref(), Some("Quick idea"));
        assert_eq!(messages[1].subject, None);
    }

    #[test]
    fn test_parse_fenced_json() {
        let response = "```json\n{\"messages\":[{\"body\":\"Hello there\"}]}\n```";
        let messages = parse_message_response(response).unwrap();
        assert_eq!(messages[0].body, "Hello there");
    }

    #[test]
    fn test_parse_json_in_prose() {
        let response = "Sure! Here you go:\n{\"messages\":[{\"body\":\"Hi\"}]}\nHope that helps.";
        let messages = parse_message_response(response).unwrap();
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_parse_line_fallback() {
        let response = "Message 1: Hi Dana, loved your talk.\nMessage 2: Dana, quick question.";
        let messages = parse_message_response(response).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].body, "Dana, quick question.");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_message_response("I cannot help with that.").unwrap_err();
        assert!(matches!(err, AgentError::ResponseFormat(_)));
    }

    #[test]
    fn test_parse_rejects_blank_bodies() {
        let err = parse_message_response(r#"{"messages":[{"body":"   "}]}"#).unwrap_err();
        assert!(matches!(err, AgentError::ResponseFormat(_)));
    }
}
