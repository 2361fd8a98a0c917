//! Client configuration
//!
//! Every client takes an explicit configuration object injected by the
//! caller; there is no process-wide base URL or embedded credential. The
//! defaults mirror the local hub's standard ports so that
//! `ChatConfig::default()` works against a stock deployment.

/// Configuration for the streaming chat client
#[derive(Clone)]
pub struct ChatConfig {
    /// Base URL of the chat-completions service, without trailing slash
    pub base_url: String,
    /// Bearer credential sent in the `Authorization` header
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
    /// System instruction prepended to every conversation
    pub system_prompt: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9997/v1".to_string(),
            api_key: String::new(),
            model: "deepseek-r1-distill-qwen".to_string(),
            system_prompt: "You are a helpful assistant.".to_string(),
        }
    }
}

impl ChatConfig {
    /// Create a configuration with the given API key and defaults otherwise
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Set the base URL (trailing slash is stripped)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the system instruction
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }
}

impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ds = f.debug_struct("ChatConfig");
        ds.field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt);
        if !self.api_key.is_empty() {
            ds.field("has_api_key", &true);
        }
        ds.finish()
    }
}

/// Configuration for the image generation client
#[derive(Debug, Clone)]
pub struct ImageConfig {
    /// Base URL of the image service, without trailing slash
    pub base_url: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8808".to_string(),
        }
    }
}

impl ImageConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }
}

/// Configuration for the speech synthesis client
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Base URL of the TTS service, without trailing slash
    pub base_url: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

impl SpeechConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }
}

/// Configuration for the natural-language-to-SQL client
#[derive(Debug, Clone)]
pub struct Nl2SqlConfig {
    /// Base URL of the NL2SQL service, without trailing slash
    pub base_url: String,
}

impl Default for Nl2SqlConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9997/v1".to_string(),
        }
    }
}

impl Nl2SqlConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }
}

/// Configuration for the knowledge-base client
#[derive(Debug, Clone)]
pub struct KnowledgeConfig {
    /// Base URL of the knowledge-base service, without trailing slash
    pub base_url: String,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8002".to_string(),
        }
    }
}

impl KnowledgeConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let url = base_url.into();
        Self {
            base_url: url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_config_strips_trailing_slash() {
        let cfg = ChatConfig::new("key").with_base_url("http://localhost:9997/v1/");
        assert_eq!(cfg.base_url, "http://localhost:9997/v1");
    }

    #[test]
    fn debug_does_not_leak_api_key() {
        let cfg = ChatConfig::new("sk-secret-value");
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("sk-secret-value"));
        assert!(rendered.contains("has_api_key"));
    }
}
