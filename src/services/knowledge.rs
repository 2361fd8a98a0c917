//! Knowledge-base query client
//!
//! Wraps the retrieval-augmented QA service: ask a question, get an answer
//! grounded in uploaded documents plus the passages it was drawn from.

use serde::{Deserialize, Serialize};

use crate::config::KnowledgeConfig;
use crate::error::AihubError;

#[derive(Debug, Clone, Serialize)]
struct QueryRequestBody<'a> {
    query: &'a str,
    chat_history: &'a [(String, String)],
}

/// One retrieved passage with its normalized similarity score
#[derive(Debug, Clone, Deserialize)]
pub struct SourcePassage {
    pub content: String,
    pub score: f64,
}

/// Answer to a knowledge-base query
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeQueryResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourcePassage>,
}

/// Current contents of the knowledge base
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBaseStatus {
    pub document_count: u64,
    #[serde(default)]
    pub uploaded_files: Vec<String>,
}

/// Client for the hub's knowledge-base service
#[derive(Debug, Clone)]
pub struct KnowledgeClient {
    config: KnowledgeConfig,
    http: reqwest::Client,
}

impl KnowledgeClient {
    pub fn new(config: KnowledgeConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: KnowledgeConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Ask a question, optionally continuing a previous exchange.
    ///
    /// `chat_history` is a list of earlier (question, answer) pairs.
    pub async fn query(
        &self,
        query: &str,
        chat_history: &[(String, String)],
    ) -> Result<KnowledgeQueryResponse, AihubError> {
        if query.trim().is_empty() {
            return Err(AihubError::InvalidInput("query must not be empty".to_string()));
        }
        let url = format!("{}/query", self.config.base_url);
        super::post_json(&self.http, &url, &QueryRequestBody { query, chat_history }).await
    }

    /// Upload a document and index it into the knowledge base.
    ///
    /// The service accepts `.pdf`, `.txt` and `.docx` files as a multipart
    /// `file` field; anything else comes back as a 400 with its own message.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), AihubError> {
        if file_name.trim().is_empty() {
            return Err(AihubError::InvalidInput("file name must not be empty".to_string()));
        }
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/upload", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AihubError::ConnectionError(format!("failed to send request: {e}")))?;
        let _: serde_json::Value = super::decode_json(response).await?;
        Ok(())
    }

    /// Fetch document count and uploaded file names
    pub async fn status(&self) -> Result<KnowledgeBaseStatus, AihubError> {
        let url = format!("{}/knowledge_base/status", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AihubError::ConnectionError(format!("failed to send request: {e}")))?;
        super::decode_json(response).await
    }

    /// Remove every document from the knowledge base
    pub async fn clear(&self) -> Result<(), AihubError> {
        let url = format!("{}/knowledge_base/clear", self.config.base_url);
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| AihubError::ConnectionError(format!("failed to send request: {e}")))?;
        let _: serde_json::Value = super::decode_json(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_rejects_empty_file_name() {
        let client = KnowledgeClient::new(KnowledgeConfig::new("http://127.0.0.1:1"));
        let err = client.upload("  ", b"text".to_vec()).await.expect_err("err");
        assert!(matches!(err, AihubError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn empty_query_is_rejected() {
        let client = KnowledgeClient::new(KnowledgeConfig::new("http://127.0.0.1:1"));
        let err = client.query("", &[]).await.expect_err("err");
        assert!(matches!(err, AihubError::InvalidInput(_)));
    }

    #[test]
    fn query_body_includes_history() {
        let history = vec![("q1".to_string(), "a1".to_string())];
        let body = QueryRequestBody {
            query: "next",
            chat_history: &history,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["query"], "next");
        assert_eq!(json["chat_history"][0][0], "q1");
    }
}
