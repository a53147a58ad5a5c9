//! Transport executor trait.

use std::future::Future;

use crate::{RawResponse, Request, Result};

/// Executes one assembled request as a single HTTP round trip.
///
/// The transport is a black box to the dispatch engine: connection
/// pooling, TLS, and default timeouts all live behind this trait.
/// Implementations must be safe for concurrent use.
pub trait Transport: Send + Sync {
    /// Perform exactly one synchronous round trip; the invocation blocks
    /// until the transport resolves.
    ///
    /// # Errors
    ///
    /// Returns a transport-layer error (connection, TLS, timeout),
    /// distinct from assembly or decoding errors.
    fn execute(&self, request: Request) -> impl Future<Output = Result<RawResponse>> + Send;
}
