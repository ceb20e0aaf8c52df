use crate::models::discord::*;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Maximum number of messages Discord returns per history page.
pub const PAGE_SIZE: usize = 100;

#[async_trait]
pub trait DiscordApi {
    async fn current_user(&self) -> Result<CurrentUser>;
    async fn list_guilds(&self) -> Result<Vec<Guild>>;
    async fn list_channels(&self, guild_id: &str) -> Result<Vec<Channel>>;
    /// All currently active threads in a guild, any parent channel.
    async fn active_threads(&self, guild_id: &str) -> Result<Vec<Channel>>;
    /// Public archived threads under one channel (forum posts land here).
    async fn archived_threads(&self, channel_id: &str) -> Result<Vec<Channel>>;
    /// One page of messages, newest first, optionally anchored before an id.
    async fn messages_before(
        &self,
        channel_id: &str,
        limit: usize,
        before: Option<&str>,
    ) -> Result<Vec<DiscordMessage>>;
}

pub struct DiscordClient {
    client: Client,
    base_url: String,
}

impl DiscordClient {
    pub fn new(token: String) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bot {}", token)).unwrap(),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .unwrap();

        Self {
            client,
            base_url: DISCORD_API_BASE.to_string(),
        }
    }
}

#[async_trait]
impl DiscordApi for DiscordClient {
    async fn current_user(&self) -> Result<CurrentUser> {
        let url = format!("{}/users/@me", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .context("Discord rejected the credential")?
            .json()
            .await?;
        Ok(response)
    }

    async fn list_guilds(&self) -> Result<Vec<Guild>> {
        let url = format!("{}/users/@me/guilds", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }

    async fn list_channels(&self, guild_id: &str) -> Result<Vec<Channel>> {
        let url = format!("{}/guilds/{}/channels", self.base_url, guild_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }

    async fn active_threads(&self, guild_id: &str) -> Result<Vec<Channel>> {
        let url = format!("{}/guilds/{}/threads/active", self.base_url, guild_id);
        let response: ThreadList = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.threads)
    }

    async fn archived_threads(&self, channel_id: &str) -> Result<Vec<Channel>> {
        let url = format!(
            "{}/channels/{}/threads/archived/public",
            self.base_url, channel_id
        );
        let response: ThreadList = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.threads)
    }

    async fn messages_before(
        &self,
        channel_id: &str,
        limit: usize,
        before: Option<&str>,
    ) -> Result<Vec<DiscordMessage>> {
        let mut url = format!(
            "{}/channels/{}/messages?limit={}",
            self.base_url, channel_id, limit
        );
        if let Some(before) = before {
            url.push_str(&format!("&before={}", before));
        }
        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }
}
