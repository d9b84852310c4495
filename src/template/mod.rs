//! Review-template parsing and resolution.
//!
//! A template is a JSON document carrying a sequence of role-tagged
//! messages, each with either plain-string content or an ordered list of
//! text/image parts. [`parse_template`] validates the whole document against
//! that schema; [`resolve_template`](resolve::resolve_template) substitutes
//! `{{variable}}` placeholders.
//!
//! Wire format:
//!
//! ```json
//! {
//!   "messages": [
//!     { "role": "system", "content": "You judge {{contest}} entries." },
//!     { "role": "user", "content": [
//!       { "type": "text", "text": "Entry: {{title}}" },
//!       { "type": "image_url", "image_url": { "url": "{{image}}" } }
//!     ]}
//!   ]
//! }
//! ```

use crate::error::TemplateError;
use serde::{Deserialize, Serialize};

mod resolve;

pub use resolve::{ResolvedTemplate, resolve_template};

/// The author of a message. Unknown roles are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrlPayload {
    pub url: String,
}

/// One part of a multi-part message. The `type` tag discriminates; unknown
/// tags are rejected, not coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    Text { text: String },
    ImageUrl { image_url: ImageUrlPayload },
}

/// Message content: a plain string or an ordered sequence of parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentItem>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

/// A validated message template. Top-level fields beyond `messages` are
/// tolerated (authoring tools attach their own metadata).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewTemplate {
    pub messages: Vec<Message>,
}

/// Parses and schema-validates a raw template document.
///
/// Two-stage: malformed JSON is [`TemplateError::Parse`]; valid JSON of the
/// wrong shape (unknown role, untagged content item, `image_url` without a
/// `url`) is [`TemplateError::Validation`]; an empty `messages` sequence is
/// [`TemplateError::EmptyMessages`]. No substitution happens here.
pub fn parse_template(raw: &str) -> Result<ReviewTemplate, TemplateError> {
    let document: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| TemplateError::Parse(e.to_string()))?;
    let template: ReviewTemplate =
        serde_json::from_value(document).map_err(|e| TemplateError::Validation(e.to_string()))?;
    if template.messages.is_empty() {
        return Err(TemplateError::EmptyMessages);
    }
    Ok(template)
}
