use std::collections::{HashMap, HashSet};

use anyhow::Result;
use log::debug;

use crate::api::discord::DiscordApi;
use crate::models::discord::Channel;
use crate::models::{ChannelKind, ConversationUnit};

/// Enumerate every summarization target in one guild, in traversal order:
/// each message-capable channel, immediately followed by its threads.
///
/// Threads come from two listings: the guild-wide active-thread index,
/// grouped here by parent channel, and (for forums only) the channel's
/// public archived threads. A thread present in both is yielded once;
/// the active listing wins.
pub async fn guild_units(
    api: &impl DiscordApi,
    guild_id: &str,
) -> Result<Vec<ConversationUnit>> {
    let channels = api.list_channels(guild_id).await?;
    let active = api.active_threads(guild_id).await?;

    let mut threads_by_parent: HashMap<String, Vec<Channel>> = HashMap::new();
    for thread in active {
        if let Some(parent_id) = thread.parent_id.clone() {
            threads_by_parent.entry(parent_id).or_default().push(thread);
        }
    }

    let mut seen_threads: HashSet<String> = HashSet::new();
    let mut units = Vec::new();

    for channel in channels {
        let Some(kind) = ChannelKind::from_code(channel.kind) else {
            debug!("skipping channel {} with unknown type {}", channel.id, channel.kind);
            continue;
        };
        if !kind.has_messages() {
            continue;
        }

        units.push(ConversationUnit::from_channel(&channel, kind));

        if kind.has_threads() {
            for thread in threads_by_parent.remove(&channel.id).unwrap_or_default() {
                if seen_threads.insert(thread.id.clone()) {
                    units.push(ConversationUnit::from_channel(&thread, ChannelKind::Thread));
                }
            }
        }

        if kind.is_forum_root() {
            for thread in api.archived_threads(&channel.id).await? {
                if seen_threads.insert(thread.id.clone()) {
                    units.push(ConversationUnit::from_channel(&thread, ChannelKind::Thread));
                }
            }
        }
    }

    Ok(units)
}
