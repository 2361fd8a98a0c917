//! Stateful SSE frame decoder for chat-completions streams
//!
//! `SseChatDecoder` owns a byte buffer of not-yet-complete frame bytes and a
//! small lifecycle state machine. Callers push response chunks through
//! [`SseChatDecoder::feed`] and signal end-of-stream with
//! [`SseChatDecoder::finish`]; both return the content-bearing events decoded
//! so far, in input order.
//!
//! The buffer holds raw bytes, not text: only complete lines are decoded to
//! UTF-8, so a multi-byte code point split across two reads is carried over
//! verbatim and never corrupted.

use serde::Deserialize;

use crate::error::AihubError;

/// Prefix of every content-bearing line of the wire format
pub const DATA_PREFIX: &str = "data: ";

/// Sentinel payload signaling that no further frames will arrive
pub const DONE_MARKER: &str = "[DONE]";

/// Decoder lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderState {
    /// Accumulating chunks, frames may still arrive
    Open,
    /// End-of-stream observed, flushing the buffered remainder
    Draining,
    /// Resources released, no further input is accepted
    Closed,
}

/// Result of decoding one frame
#[derive(Debug)]
pub enum FrameEvent {
    /// An incremental fragment of assistant text
    Delta(String),
    /// A well-formed but non-content-bearing frame (keep-alive, usage, ...)
    Skip,
    /// The `[DONE]` sentinel was observed
    Terminate,
    /// The frame payload could not be parsed; the stream continues
    Error(AihubError),
}

/// One chat-completions stream chunk, reduced to the fields we read
#[derive(Debug, Deserialize)]
struct ChunkPayload {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    delta: Option<ChunkDelta>,
}

#[derive(Debug, Deserialize)]
struct ChunkDelta {
    content: Option<String>,
}

impl ChunkPayload {
    /// Incremental content of the first choice, if any
    fn into_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()?
            .delta?
            .content
            .filter(|content| !content.is_empty())
    }
}

/// Incremental decoder for one streaming chat session.
///
/// Frames are newline-delimited; a single input chunk may contain zero, one
/// or many complete frames plus a trailing partial frame, which is retained
/// until the next call. Deltas come out in the exact order their frames
/// appear in the input, regardless of how the bytes were chunked.
#[derive(Debug, Default)]
pub struct SseChatDecoder {
    buf: Vec<u8>,
    state: DecoderStateInner,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum DecoderStateInner {
    #[default]
    Open,
    Draining,
    Closed,
}

impl SseChatDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state
    pub fn state(&self) -> DecoderState {
        match self.state {
            DecoderStateInner::Open => DecoderState::Open,
            DecoderStateInner::Draining => DecoderState::Draining,
            DecoderStateInner::Closed => DecoderState::Closed,
        }
    }

    /// Whether the decoder has seen the sentinel or been finished
    pub fn is_closed(&self) -> bool {
        self.state == DecoderStateInner::Closed
    }

    /// Consume one chunk of response bytes.
    ///
    /// Returns every actionable event decoded from lines completed by this
    /// chunk; non-content frames are skipped silently. A trailing line with
    /// no newline stays buffered for the next call. After the sentinel the
    /// decoder is closed and all further input is ignored, including bytes
    /// already buffered behind the sentinel.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<FrameEvent> {
        if self.state != DecoderStateInner::Open {
            return Vec::new();
        }
        self.buf.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            match Self::parse_frame_bytes(&line[..pos]) {
                FrameEvent::Skip => {}
                FrameEvent::Terminate => {
                    self.close();
                    events.push(FrameEvent::Terminate);
                    return events;
                }
                event => events.push(event),
            }
        }
        events
    }

    /// Signal end-of-stream and flush the buffered remainder.
    ///
    /// Once the transport reports completion the trailing line can no longer
    /// grow, so it is treated as the final complete frame even without a
    /// newline. Idempotent: a closed decoder yields nothing.
    pub fn finish(&mut self) -> Vec<FrameEvent> {
        if self.state != DecoderStateInner::Open {
            return Vec::new();
        }
        self.state = DecoderStateInner::Draining;

        let mut events = Vec::new();
        if !self.buf.is_empty() {
            let line = std::mem::take(&mut self.buf);
            match Self::parse_frame_bytes(&line) {
                FrameEvent::Skip => {}
                event => events.push(event),
            }
        }
        self.state = DecoderStateInner::Closed;
        events
    }

    fn close(&mut self) {
        self.buf.clear();
        self.state = DecoderStateInner::Closed;
    }

    fn parse_frame_bytes(line: &[u8]) -> FrameEvent {
        match std::str::from_utf8(line) {
            Ok(text) => Self::parse_frame(text),
            Err(e) => FrameEvent::Error(AihubError::FrameParseError(format!(
                "frame is not valid UTF-8: {e}"
            ))),
        }
    }

    /// Classify one complete line of the wire format.
    ///
    /// Lines without the `data: ` prefix and frames whose payload is blank
    /// or carries no content field are `Skip`; the sentinel is `Terminate`;
    /// an unparseable payload is a recoverable `Error`.
    pub fn parse_frame(line: &str) -> FrameEvent {
        let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
            return FrameEvent::Skip;
        };
        let payload = payload.trim();
        if payload.is_empty() {
            return FrameEvent::Skip;
        }
        if payload == DONE_MARKER {
            return FrameEvent::Terminate;
        }
        match serde_json::from_str::<ChunkPayload>(payload) {
            Ok(chunk) => match chunk.into_content() {
                Some(content) => FrameEvent::Delta(content),
                None => FrameEvent::Skip,
            },
            Err(e) => FrameEvent::Error(AihubError::FrameParseError(format!(
                "invalid frame payload: {e}"
            ))),
        }
    }
}
