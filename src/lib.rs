//! aihub-client
//!
//! Async clients for a local AI services hub: streaming chat completions,
//! image generation, speech synthesis, NL2SQL conversion and knowledge-base
//! querying.
//!
//! The heart of the crate is [`sse::SseChatDecoder`], an incremental decoder
//! that reassembles the chat service's newline-delimited `data:` frames from
//! arbitrarily-chunked response bytes and yields ordered text deltas. The
//! rest is thin request/response plumbing over `reqwest`.
//!
//! # Example
//!
//! ```rust,ignore
//! use aihub_client::{ChatClient, ChatConfig};
//!
//! let client = ChatClient::new(ChatConfig::new("sk-...").with_base_url("http://127.0.0.1:9997/v1"));
//! let reply = client
//!     .send_message("What is a monad?", |delta| print!("{delta}"))
//!     .await?;
//! ```
#![deny(unsafe_code)]

pub mod chat;
pub mod config;
pub mod error;
pub mod services;
pub mod sse;
pub mod stream;
pub mod types;

pub use chat::ChatClient;
pub use config::{ChatConfig, ImageConfig, KnowledgeConfig, Nl2SqlConfig, SpeechConfig};
pub use error::{AihubError, Result};
pub use services::{ImageClient, KnowledgeClient, Nl2SqlClient, SpeechClient};
pub use sse::{FrameEvent, SseChatDecoder};
pub use stream::DeltaStream;
pub use types::{ChatMessage, MessageRole};
