//! Dispatch error model.

use thiserror::Error;

/// A single handler that returned `Err` during a notification.
#[derive(Debug)]
pub struct HandlerFailure {
    /// Position of the handler in the registration order.
    pub position: usize,
    /// [`EventHandler::name`](crate::EventHandler::name) of the failing handler.
    pub handler: &'static str,
    pub error: anyhow::Error,
}

impl core::fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{} {}: {:#}", self.position, self.handler, self.error)
    }
}

#[derive(Debug, Error)]
pub enum DispatchError {
    /// One or more handlers failed; every registered handler was still invoked.
    #[error("{} of {attempted} handler(s) failed for `{event_type}`", .failures.len())]
    HandlersFailed {
        event_type: &'static str,
        attempted: usize,
        failures: Vec<HandlerFailure>,
    },
}

impl DispatchError {
    /// Handler failures carried by this error.
    pub fn failures(&self) -> &[HandlerFailure] {
        match self {
            DispatchError::HandlersFailed { failures, .. } => failures,
        }
    }
}
