use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Guild {
    pub id: String,
    pub name: String,
}

/// Wire shape shared by guild channels and threads; threads carry their
/// parent channel in `parent_id`.
#[derive(Debug, Deserialize, Clone)]
pub struct Channel {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: u8,
    pub parent_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThreadList {
    pub threads: Vec<Channel>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Author {
    pub username: String,
    #[serde(default)]
    pub bot: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Attachment {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiscordMessage {
    pub id: String,
    pub author: Author,
    #[serde(default)]
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub embeds: Vec<serde_json::Value>,
}
