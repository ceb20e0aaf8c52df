pub mod discord;
pub mod openai;

use chrono::{DateTime, Utc};

use self::discord::{Channel, DiscordMessage};

/// Closed set of channel kinds the tool understands, decoded from
/// Discord's numeric channel-type codes. Unknown codes decode to `None`
/// and the channel is skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    PlainText,
    VoiceText,
    Announcement,
    Forum,
    Category,
    Thread,
}

impl ChannelKind {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ChannelKind::PlainText),
            2 => Some(ChannelKind::VoiceText),
            4 => Some(ChannelKind::Category),
            5 => Some(ChannelKind::Announcement),
            10 | 11 | 12 => Some(ChannelKind::Thread),
            15 => Some(ChannelKind::Forum),
            _ => None,
        }
    }

    /// Whether the unit itself is a summarization target.
    pub fn has_messages(self) -> bool {
        matches!(
            self,
            ChannelKind::PlainText
                | ChannelKind::VoiceText
                | ChannelKind::Announcement
                | ChannelKind::Forum
        )
    }

    /// Whether threads can hang off this channel.
    pub fn has_threads(self) -> bool {
        matches!(
            self,
            ChannelKind::PlainText | ChannelKind::Announcement | ChannelKind::Forum
        )
    }

    pub fn is_forum_root(self) -> bool {
        matches!(self, ChannelKind::Forum)
    }
}

/// A channel or thread treated as one summarization target. Materialized
/// per run from the guild enumeration and discarded after its summary is
/// printed.
#[derive(Debug, Clone)]
pub struct ConversationUnit {
    pub id: String,
    pub name: String,
    pub kind: ChannelKind,
    pub parent_id: Option<String>,
}

impl ConversationUnit {
    pub fn from_channel(channel: &Channel, kind: ChannelKind) -> Self {
        Self {
            id: channel.id.clone(),
            name: channel.name.clone().unwrap_or_default(),
            kind,
            parent_id: channel.parent_id.clone(),
        }
    }

    pub fn is_thread(&self) -> bool {
        self.kind == ChannelKind::Thread
    }

    /// Noun used in prompts, placeholders and log lines.
    pub fn noun(&self) -> &'static str {
        if self.is_thread() {
            "thread"
        } else {
            "channel"
        }
    }
}

/// One chat entry, immutable once built from the wire message.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub attachments: Vec<String>,
    pub embed_count: usize,
    pub from_bot: bool,
}

impl From<DiscordMessage> for ChatMessage {
    fn from(msg: DiscordMessage) -> Self {
        Self {
            id: msg.id,
            author: msg.author.username,
            content: msg.content,
            timestamp: msg.timestamp,
            attachments: msg.attachments.into_iter().map(|a| a.url).collect(),
            embed_count: msg.embeds.len(),
            from_bot: msg.author.bot,
        }
    }
}

/// Generated text for one unit, used only for console reporting.
#[derive(Debug, Clone)]
pub struct Summary {
    pub unit_name: String,
    pub is_thread: bool,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_type_codes_decode() {
        assert_eq!(ChannelKind::from_code(0), Some(ChannelKind::PlainText));
        assert_eq!(ChannelKind::from_code(2), Some(ChannelKind::VoiceText));
        assert_eq!(ChannelKind::from_code(4), Some(ChannelKind::Category));
        assert_eq!(ChannelKind::from_code(5), Some(ChannelKind::Announcement));
        assert_eq!(ChannelKind::from_code(11), Some(ChannelKind::Thread));
        assert_eq!(ChannelKind::from_code(15), Some(ChannelKind::Forum));
        assert_eq!(ChannelKind::from_code(13), None);
    }

    #[test]
    fn categories_are_never_summarization_targets() {
        assert!(!ChannelKind::Category.has_messages());
        assert!(!ChannelKind::Category.has_threads());
    }

    #[test]
    fn forums_carry_threads_and_mark_the_forum_root() {
        assert!(ChannelKind::Forum.has_messages());
        assert!(ChannelKind::Forum.has_threads());
        assert!(ChannelKind::Forum.is_forum_root());
        assert!(!ChannelKind::VoiceText.has_threads());
    }
}
