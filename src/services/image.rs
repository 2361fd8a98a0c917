//! Image generation client

use serde::{Deserialize, Serialize};

use crate::config::ImageConfig;
use crate::error::AihubError;

/// Image generation request
#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationRequest {
    /// Text prompt describing the image
    pub prompt: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageGenerationRequest {
    /// Create a request with the hub's default 1024x1024 canvas
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            width: 1024,
            height: 1024,
        }
    }

    /// Set the image dimensions
    pub const fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Image generation response
#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationResponse {
    pub code: i64,
    pub message: String,
    pub data: ImageData,
    #[serde(default)]
    pub request_id: String,
}

/// Generated image payload: URLs and/or base64-encoded bytes
#[derive(Debug, Clone, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub binary_data_base64: Vec<String>,
}

impl ImageGenerationResponse {
    /// URL of the first generated image, if the service returned URLs
    pub fn first_url(&self) -> Option<&str> {
        self.data.image_urls.first().map(String::as_str)
    }
}

/// Client for the hub's image generation service
#[derive(Debug, Clone)]
pub struct ImageClient {
    config: ImageConfig,
    http: reqwest::Client,
}

impl ImageClient {
    pub fn new(config: ImageConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: ImageConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Generate an image from a text prompt
    pub async fn generate(
        &self,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse, AihubError> {
        if request.prompt.trim().is_empty() {
            return Err(AihubError::InvalidInput("prompt must not be empty".to_string()));
        }
        let url = format!("{}/v1/image/create", self.config.base_url);
        super::post_json(&self.http, &url, request).await
    }
}
