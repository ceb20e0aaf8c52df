use crate::models::openai::*;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Fixed generation parameters; summaries stay short and only mildly creative.
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

#[async_trait]
pub trait ChatApi {
    /// Single-turn completion: one system instruction, one user transcript.
    async fn complete(&self, instruction: &str, transcript: &str) -> Result<String>;
}

pub struct OpenAiClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", api_key)).unwrap(),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .default_headers(headers)
            .build()
            .unwrap();

        Self {
            client,
            base_url: OPENAI_API_BASE.to_string(),
            model,
        }
    }
}

#[async_trait]
impl ChatApi for OpenAiClient {
    async fn complete(&self, instruction: &str, transcript: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: instruction.to_string(),
                },
                ChatRequestMessage {
                    role: "user",
                    content: transcript.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response: ChatResponse = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .context("Model response contained no choices")?;
        Ok(choice.message.content)
    }
}
