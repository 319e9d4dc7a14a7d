// src/services/chat_client.rs
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

use crate::{
    config::ClientConfig,
    error::ClientError,
    message::{ChatRequest, ChatResponse},
};

/// The two calls the chat screen needs from the remote chatbot.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// One POST per call, no retries. Blank messages fail without touching
    /// the network.
    async fn send_message(&self, request: ChatRequest) -> Result<String, ClientError>;

    /// True iff the liveness probe answered 200.
    async fn check_health(&self) -> bool;
}

/// HTTP client for the chatbot service: `POST {base}/api/message` and
/// `GET {base}/`.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    probe: reqwest::Client,
    config: ClientConfig,
}

impl ChatClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .timeout(config.connect_timeout + config.read_timeout)
            .build()?;
        let probe = reqwest::Client::builder()
            .connect_timeout(config.health_timeout)
            .read_timeout(config.health_timeout)
            .timeout(config.health_timeout + config.health_timeout)
            .build()?;

        Ok(Self { http, probe, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Shorthand for the common call shapes: message only, message with a
    /// location, or message with location and language.
    pub async fn send(
        &self,
        message: &str,
        location: Option<&str>,
        language: Option<&str>,
    ) -> Result<String, ClientError> {
        let request = ChatRequest::new(message)
            .with_location(location)
            .with_language(language);
        self.send_message(request).await
    }

    async fn post_message(&self, request: &ChatRequest) -> Result<String, ClientError> {
        let url = self.config.message_url();
        debug!(%url, location = ?request.location, language = ?request.language, "sending chat message");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        Ok(parsed.reply)
    }
}

#[async_trait]
impl ChatService for ChatClient {
    async fn send_message(&self, request: ChatRequest) -> Result<String, ClientError> {
        if request.is_empty() {
            return Err(ClientError::EmptyMessage);
        }

        match self.post_message(&request).await {
            Ok(reply) => {
                info!(chars = reply.len(), "chatbot replied");
                Ok(reply)
            }
            Err(err) => {
                warn!(error = %err, "error sending message");
                Err(err)
            }
        }
    }

    async fn check_health(&self) -> bool {
        let url = self.config.health_url();
        match self.probe.get(&url).send().await {
            Ok(response) => {
                let healthy = response.status() == StatusCode::OK;
                info!(%url, status = response.status().as_u16(), healthy, "health check");
                healthy
            }
            Err(err) => {
                warn!(%url, error = %err, "health check failed");
                false
            }
        }
    }
}
