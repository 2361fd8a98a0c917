//! Stream type aliases

use std::pin::Pin;

use futures::Stream;

use crate::error::AihubError;

/// Lazy, single-pass sequence of assistant text deltas.
///
/// Dropping the stream abandons the session and releases the underlying
/// transport; it cannot be restarted.
pub type DeltaStream = Pin<Box<dyn Stream<Item = Result<String, AihubError>> + Send>>;
