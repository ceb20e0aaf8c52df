use std::time::Duration;

use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

use crate::api::openai::ChatApi;
use crate::models::{ChatMessage, ConversationUnit};

/// Produce the summary text for one unit. Never fails: an empty window
/// yields the fixed no-activity placeholder without touching the model,
/// and a model error yields a placeholder carrying the error text.
pub async fn generate(
    api: &impl ChatApi,
    unit: &ConversationUnit,
    messages: &[ChatMessage],
    instruction: &str,
) -> String {
    if messages.is_empty() {
        return format!(
            "No activity in this {} during the specified period.",
            unit.noun()
        );
    }

    let transcript = format_transcript(messages);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(format!("Summarizing {} {}...", unit.noun(), unit.name));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = api.complete(instruction, &transcript).await;

    spinner.finish_and_clear();

    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to summarize {} {}: {}", unit.noun(), unit.name, e);
            format!("Error generating summary: {}", e)
        }
    }
}

/// One line per message, blank-line separated:
/// `author (localized timestamp): body`, with bracketed notes for
/// attachments and embeds.
pub fn format_transcript(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|msg| {
            let mut content = msg.content.clone();
            if !msg.attachments.is_empty() {
                content.push_str(&format!(
                    "\n[Shared {} attachment(s)]",
                    msg.attachments.len()
                ));
            }
            if msg.embed_count > 0 {
                content.push_str(&format!("\n[Shared {} embed(s)]", msg.embed_count));
            }
            format!(
                "{} ({}): {}",
                msg.author,
                msg.timestamp.with_timezone(&Local).format("%c"),
                content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(author: &str, content: &str, attachments: usize, embeds: usize) -> ChatMessage {
        ChatMessage {
            id: "1".to_string(),
            author: author.to_string(),
            content: content.to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            attachments: (0..attachments)
                .map(|i| format!("https://cdn.example/{}.png", i))
                .collect(),
            embed_count: embeds,
            from_bot: false,
        }
    }

    #[test]
    fn transcript_notes_attachments_and_embeds() {
        let messages = vec![message("alice", "look at this", 2, 1)];
        let transcript = format_transcript(&messages);
        assert!(transcript.starts_with("alice ("));
        assert!(transcript.contains("look at this"));
        assert!(transcript.contains("[Shared 2 attachment(s)]"));
        assert!(transcript.contains("[Shared 1 embed(s)]"));
    }

    #[test]
    fn transcript_joins_messages_with_blank_lines() {
        let messages = vec![message("alice", "first", 0, 0), message("bob", "second", 0, 0)];
        let transcript = format_transcript(&messages);
        assert_eq!(transcript.matches("\n\n").count(), 1);
        assert!(!transcript.contains("[Shared"));
    }
}
