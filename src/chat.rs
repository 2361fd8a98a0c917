//! Streaming chat client
//!
//! Issues the chat-completions request and exposes the response as a
//! [`DeltaStream`]. The read loop is the sole suspension point: each chunk
//! is fully decoded into frames before the next read is awaited, so deltas
//! reach the caller in wire order. Dropping the stream drops the response
//! and with it the connection, on every exit path.

use futures_util::StreamExt;

use crate::config::ChatConfig;
use crate::error::AihubError;
use crate::sse::{FrameEvent, SseChatDecoder};
use crate::stream::DeltaStream;
use crate::types::{ChatMessage, ChatRequestBody};

/// Client for the hub's streaming chat-completions endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    config: ChatConfig,
    http: reqwest::Client,
}

impl ChatClient {
    /// Create a client with its own HTTP connection pool
    pub fn new(config: ChatConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_http_client(config: ChatConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Open a streaming session for the given conversation.
    ///
    /// Fails with [`AihubError::ConnectionError`] if the transport cannot be
    /// established and [`AihubError::ApiError`] on a non-success status.
    /// Frames that cannot be parsed are logged and dropped; only connection
    /// loss or the termination sentinel ends the stream.
    pub async fn chat_stream(&self, messages: Vec<ChatMessage>) -> Result<DeltaStream, AihubError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = ChatRequestBody::new(self.config.model.clone(), messages).with_streaming(true);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AihubError::ConnectionError(format!("failed to send request: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AihubError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(url = %url, model = %self.config.model, "chat stream opened");

        let stream = async_stream::stream! {
            let mut bytes = response.bytes_stream();
            let mut decoder = SseChatDecoder::new();

            while let Some(chunk) = bytes.next().await {
                let chunk: bytes::Bytes = match chunk {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        yield Err(AihubError::ConnectionError(format!(
                            "stream interrupted: {e}"
                        )));
                        return;
                    }
                };
                for event in decoder.feed(&chunk) {
                    match event {
                        FrameEvent::Delta(text) => yield Ok(text),
                        FrameEvent::Terminate => {
                            tracing::debug!("chat stream terminated by sentinel");
                            return;
                        }
                        FrameEvent::Error(e) => {
                            tracing::warn!(error = %e, "dropping unparseable frame");
                        }
                        FrameEvent::Skip => {}
                    }
                }
            }

            // Natural end-of-stream: flush whatever is still buffered.
            for event in decoder.finish() {
                match event {
                    FrameEvent::Delta(text) => yield Ok(text),
                    FrameEvent::Error(e) => {
                        tracing::warn!(error = %e, "dropping unparseable trailing frame");
                    }
                    FrameEvent::Skip | FrameEvent::Terminate => {}
                }
            }
            tracing::debug!("chat stream drained");
        };

        Ok(Box::pin(stream))
    }

    /// Send one user message and stream the answer through a callback.
    ///
    /// The configured system prompt is prepended to the conversation. Each
    /// delta is forwarded to `on_delta` as it arrives; the return value is
    /// the full concatenated assistant message.
    pub async fn send_message<F>(&self, text: &str, mut on_delta: F) -> Result<String, AihubError>
    where
        F: FnMut(&str),
    {
        if text.trim().is_empty() {
            return Err(AihubError::InvalidInput("message must not be empty".to_string()));
        }

        let messages = vec![
            ChatMessage::system(self.config.system_prompt.clone()),
            ChatMessage::user(text),
        ];

        let mut stream = self.chat_stream(messages).await?;
        let mut full = String::new();
        while let Some(item) = stream.next().await {
            let delta = item?;
            on_delta(&delta);
            full.push_str(&delta);
        }
        Ok(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_message_is_rejected_before_any_request() {
        let client = ChatClient::new(ChatConfig::new("key").with_base_url("http://127.0.0.1:1"));
        let err = client.send_message("   ", |_| {}).await.expect_err("err");
        assert!(matches!(err, AihubError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_connection_error() {
        // Port 1 on localhost refuses connections immediately.
        let client = ChatClient::new(ChatConfig::new("key").with_base_url("http://127.0.0.1:1"));
        let err = client
            .chat_stream(vec![ChatMessage::user("hi")])
            .await
            .map(|_| ())
            .expect_err("err");
        assert!(matches!(err, AihubError::ConnectionError(_)));
    }
}
