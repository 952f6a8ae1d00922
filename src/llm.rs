use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 500;
// Controls answer variability only, not correctness.
const TEMPERATURE: f32 = 0.5;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A chat-completion backend: takes a system instruction and a user prompt,
/// returns generated text. Handlers depend on this trait so that tests can
/// substitute a fake instead of a live provider.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> anyhow::Result<String>;
}

/// Client for an OpenAI-compatible chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: &'static str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

impl OpenAiClient {
    pub fn new(api_key: String, api_base: String) -> anyhow::Result<Self> {
        if api_key.is_empty() {
            return Err(anyhow::anyhow!("API_KEY not set"));
        }
        // Bounded timeout so a stalled provider cannot hang the handler.
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key,
            api_base,
        })
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> anyhow::Result<String> {
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        info!("Sending chat completion request to {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        info!("Received response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Chat completion request failed ({}): {}",
                status,
                error_text
            ));
        }

        let body = response.text().await?;
        debug!("Response body: {}", body);

        let chat_response: ChatResponse = serde_json::from_str(&body)?;
        let answer = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("Chat completion response contained no choices"))?;

        Ok(answer)
    }
}

/// Deterministic placeholder used when mock mode is enabled: no network call
/// is made, and the answer embeds the submitted context so integration tests
/// can assert on it.
pub fn mock_answer(product_title: &str, platform: &str, query: &str) -> String {
    format!(
        "<p>[mock] Shopping assistant answer for \"{product_title}\" on {platform}: {query}</p>"
    )
}
