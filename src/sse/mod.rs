//! Incremental streaming-response decoding
//!
//! The chat service answers with newline-delimited `data: ` frames whose
//! payload is either a JSON chunk or the `[DONE]` sentinel. This module
//! turns arbitrarily-chunked response bytes into ordered text deltas
//! without any knowledge of the transport.

mod decoder;

pub use decoder::{DecoderState, FrameEvent, SseChatDecoder, DATA_PREFIX, DONE_MARKER};
