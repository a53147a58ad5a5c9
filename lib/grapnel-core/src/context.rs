//! Per-call context.

use std::time::Duration;

/// Cancellation and deadline context for a single invocation.
///
/// Passed as an invocation argument, the deadline is propagated to the
/// transport; a call without a context has no deadline. Cancellation is
/// dropping the invocation future.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallContext {
    deadline: Option<Duration>,
}

impl CallContext {
    /// Create a context with no deadline.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Set a deadline for the call (chainable).
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The call deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}
