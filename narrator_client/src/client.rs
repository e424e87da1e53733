use crate::{
    error::NarratorError,
    types::{GeminiRequest, GeminiResponse},
    Narrator,
};
use async_trait::async_trait;
use config_manager::NarratorConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Gemini `generateContent` client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: NarratorConfig,
}

impl GeminiClient {
    pub fn new(config: NarratorConfig) -> Result<Self, NarratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    /// Client for a configured narrator, `None` when disabled or keyless
    pub fn from_config(config: &NarratorConfig) -> Result<Option<Self>, NarratorError> {
        if !config.is_configured() {
            return Ok(None);
        }
        Self::new(config.clone()).map(Some)
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        )
    }

    pub async fn generate_content(&self, prompt: &str) -> Result<String, NarratorError> {
        debug!("🤖 Requesting narrative from {}", self.config.model);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&GeminiRequest::from_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NarratorError::ApiError { status, message });
        }

        let body = response.text().await?;
        let parsed: GeminiResponse = serde_json::from_str(&body)?;

        match parsed.text() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(NarratorError::EmptyResponse),
        }
    }
}

#[async_trait]
impl Narrator for GeminiClient {
    async fn generate_narrative(&self, prompt: &str) -> Result<String, NarratorError> {
        self.generate_content(prompt).await
    }
}
