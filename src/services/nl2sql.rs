//! Natural-language-to-SQL client

use serde::{Deserialize, Serialize};

use crate::config::Nl2SqlConfig;
use crate::error::AihubError;

#[derive(Debug, Clone, Serialize)]
struct Nl2SqlRequestBody<'a> {
    query: &'a str,
}

/// Generated SQL for a natural-language query
#[derive(Debug, Clone, Deserialize)]
pub struct Nl2SqlResponse {
    /// The original natural-language query, echoed back
    pub natural_language: String,
    /// The generated SQL statement
    pub sql_query: String,
    /// The schema description the conversion was grounded on
    #[serde(default)]
    pub database_schema: String,
}

/// Client for the hub's NL2SQL conversion service
#[derive(Debug, Clone)]
pub struct Nl2SqlClient {
    config: Nl2SqlConfig,
    http: reqwest::Client,
}

impl Nl2SqlClient {
    pub fn new(config: Nl2SqlConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    pub fn with_http_client(config: Nl2SqlConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Convert a natural-language query to SQL.
    ///
    /// An `{"error": "..."}` object in the body surfaces as
    /// [`AihubError::UpstreamError`] with the service's own message, whatever
    /// the status code.
    pub async fn convert(&self, query: &str) -> Result<Nl2SqlResponse, AihubError> {
        if query.trim().is_empty() {
            return Err(AihubError::InvalidInput("query must not be empty".to_string()));
        }
        let url = format!("{}/api/nl2sql", self.config.base_url);
        super::post_json(&self.http, &url, &Nl2SqlRequestBody { query }).await
    }
}
