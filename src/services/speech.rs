//! Speech synthesis (TTS) client

use serde::{Deserialize, Serialize};

use crate::config::SpeechConfig;
use crate::error::AihubError;

#[derive(Debug, Clone, Serialize)]
struct SpeechRequestBody<'a> {
    text: &'a str,
}

/// Speech synthesis response; `data` is base64-encoded WAV audio
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechResponse {
    pub code: i64,
    pub message: String,
    pub data: String,
}

/// Client for the hub's text-to-speech service
#[derive(Debug, Clone)]
pub struct SpeechClient {
    config: SpeechConfig,
    http: reqwest::Client,
}

impl SpeechClient {
    pub fn new(config: SpeechConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: SpeechConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Synthesize speech for the given text
    pub async fn synthesize(&self, text: &str) -> Result<SpeechResponse, AihubError> {
        if text.trim().is_empty() {
            return Err(AihubError::InvalidInput("text must not be empty".to_string()));
        }
        let url = format!("{}/tts", self.config.base_url);
        super::post_json(&self.http, &url, &SpeechRequestBody { text }).await
    }
}
