use anyhow::Result;
use chrono::{DateTime, Utc};
use log::debug;

use crate::api::discord::{DiscordApi, PAGE_SIZE};
use crate::models::ChatMessage;

/// Fetch every human-authored message in `(cutoff, now]` for one channel or
/// thread, oldest first.
///
/// Pages arrive newest first; the cursor for the next page is the oldest id
/// of the previous one. Scanning stops the moment a message falls behind the
/// cutoff. This relies on Discord returning pages in strict
/// reverse-chronological order; messages accepted earlier in the same page
/// are kept when the boundary lands mid-page.
pub async fn fetch_window(
    api: &impl DiscordApi,
    channel_id: &str,
    cutoff: DateTime<Utc>,
) -> Result<Vec<ChatMessage>> {
    let mut collected: Vec<ChatMessage> = Vec::new();
    let mut before: Option<String> = None;

    loop {
        let page = api
            .messages_before(channel_id, PAGE_SIZE, before.as_deref())
            .await?;

        if page.is_empty() {
            break;
        }

        let page_len = page.len();
        if let Some(oldest) = page.last() {
            before = Some(oldest.id.clone());
        }

        let mut reached_cutoff = false;
        for message in page {
            if message.timestamp < cutoff {
                reached_cutoff = true;
                break;
            }
            if message.author.bot {
                continue;
            }
            collected.push(ChatMessage::from(message));
        }

        if reached_cutoff || page_len < PAGE_SIZE {
            break;
        }
    }

    collected.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    debug!(
        "fetched {} in-window messages from channel {}",
        collected.len(),
        channel_id
    );

    Ok(collected)
}
