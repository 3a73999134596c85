use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interface::CompletionInterface;

// Bounds shared by both calls of an exchange: low temperature for
// determinism-leaning output, completion capped at 100 tokens.
const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 100;

/// Client for an OpenAI-style completions endpoint
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

fn extract_completion_text(response: CompletionResponse) -> anyhow::Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text)
        .ok_or_else(|| anyhow!("no choices in completion response"))
}

impl CompletionClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionInterface for CompletionClient {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, anyhow::Error> {
        let url = format!("{}/completions", self.base_url.trim_end_matches('/'));
        let request = CompletionRequest {
            model,
            prompt,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        debug!(
            "Sending completion request: model={}, prompt_len={}",
            model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("completion endpoint returned {}: {}", status, body));
        }

        let parsed: CompletionResponse =
            response.json().await.context("decode completion JSON")?;
        extract_completion_text(parsed)
    }
}
