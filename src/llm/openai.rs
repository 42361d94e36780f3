//! OpenAI-compatible chat-completions client.
//!
//! Every request carries the same two-message conversation: the configured
//! system prompt, then a user message pairing a short text stub with the
//! image URL.

use super::{ChatClient, LlmError};
use crate::config::Config;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const USER_TEXT: &str = "What's in this image?";

pub struct OpenAiClient {
    api_key: String,
    endpoint: String,
    model: String,
    system_prompt: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ChatContent>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ChatContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            endpoint: config.openai_endpoint.clone(),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            timeout: config.request_timeout_ms.map(Duration::from_millis),
            client: reqwest::Client::new(),
        }
    }

    fn build_request(&self, image_url: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: vec![ChatContent::Text {
                        text: self.system_prompt.clone(),
                    }],
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: vec![
                        ChatContent::Text {
                            text: USER_TEXT.to_string(),
                        },
                        ChatContent::ImageUrl {
                            image_url: ImageUrl {
                                url: image_url.to_string(),
                            },
                        },
                    ],
                },
            ],
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn analyze_image(&self, image_url: &str) -> Result<String, LlmError> {
        let body = self.build_request(image_url);

        let mut request = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = resp.json().await?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}
