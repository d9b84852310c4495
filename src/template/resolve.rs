//! `{{variable}}` substitution over a parsed template.

use super::{ContentItem, ImageUrlPayload, Message, MessageContent, ReviewTemplate};
use ahash::AHashMap;
use itertools::Itertools;

/// The outcome of resolving a template against a variable map.
///
/// Unresolved placeholders are non-fatal: they stay verbatim in the output,
/// are logged once each, and their names are surfaced here for callers that
/// want to inspect them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTemplate {
    pub messages: Vec<Message>,
    /// Distinct placeholder names that had no entry in the variable map,
    /// in first-occurrence order.
    pub unresolved: Vec<String>,
}

/// Resolves every `{{identifier}}` occurrence in the template against
/// `variables`.
///
/// Substitution applies to plain-string content, to every text part's
/// `text`, and to every image part's `url`; part order is preserved and
/// parts are otherwise unchanged. Replacement is single-pass: a substituted
/// value that itself contains `{{...}}` is not expanded again. Placeholders
/// whose identifier is not a key of `variables` are left untouched and
/// reported via [`ResolvedTemplate::unresolved`], with one `log::warn!` per
/// distinct name.
pub fn resolve_template(
    template: &ReviewTemplate,
    variables: &AHashMap<String, String>,
) -> ResolvedTemplate {
    let mut seen = Vec::new();
    let messages = template
        .messages
        .iter()
        .map(|message| Message {
            role: message.role,
            content: resolve_content(&message.content, variables, &mut seen),
        })
        .collect();

    let unresolved: Vec<String> = seen.into_iter().unique().collect();
    for name in &unresolved {
        log::warn!("Unresolved template placeholder: {{{{{}}}}}", name);
    }

    ResolvedTemplate {
        messages,
        unresolved,
    }
}

fn resolve_content(
    content: &MessageContent,
    variables: &AHashMap<String, String>,
    unresolved: &mut Vec<String>,
) -> MessageContent {
    match content {
        MessageContent::Text(text) => {
            MessageContent::Text(substitute(text, variables, unresolved))
        }
        MessageContent::Parts(items) => MessageContent::Parts(
            items
                .iter()
                .map(|item| match item {
                    ContentItem::Text { text } => ContentItem::Text {
                        text: substitute(text, variables, unresolved),
                    },
                    ContentItem::ImageUrl { image_url } => ContentItem::ImageUrl {
                        image_url: ImageUrlPayload {
                            url: substitute(&image_url.url, variables, unresolved),
                        },
                    },
                })
                .collect(),
        ),
    }
}

/// Whole-match textual replacement of `{{name}}` occurrences in one pass
/// over the input. An unterminated `{{` is kept literal.
fn substitute(
    input: &str,
    variables: &AHashMap<String, String>,
    unresolved: &mut Vec<String>,
) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = &after[..end];
                match variables.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str(&rest[start..start + end + 4]);
                        unresolved.push(name.to_string());
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
