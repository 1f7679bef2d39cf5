//! Wait types
//!
//! Policy, outcome, and the trait a polled resource implements.

use std::time::Duration;

/// State label that aborts a wait
pub const DEFAULT_ERROR_STATE: &str = "ERROR";

/// Polling policy for a single wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Maximum number of lookups
    pub max_attempts: u32,
    /// Delay after each lookup that did not end the wait
    pub delay: Duration,
    /// State that ends the wait with an error
    pub error_state: String,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 360,
            delay: Duration::from_secs(5),
            error_state: DEFAULT_ERROR_STATE.to_string(),
        }
    }
}

impl WaitPolicy {
    /// Create the default policy (360 attempts, 5s apart)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attempt budget (0 is treated as 1)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Set the delay between attempts
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the error state label
    #[must_use]
    pub fn with_error_state(mut self, state: impl Into<String>) -> Self {
        self.error_state = state.into();
        self
    }

    /// Worst-case time spent sleeping
    pub fn budget(&self) -> Duration {
        self.delay * self.max_attempts
    }
}

/// A resource that reports a status label
pub trait Stateful {
    /// Current status as reported by the API
    fn state(&self) -> &str;
}

/// How a successful wait ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome<R> {
    /// The resource reached the desired state
    Reached {
        /// Resource as returned by the final lookup
        resource: R,
        /// Lookups performed
        attempts: u32,
    },
    /// The resource no longer exists and that was accepted as success
    Gone {
        /// Lookups performed
        attempts: u32,
    },
}

impl<R> WaitOutcome<R> {
    /// Number of lookups performed
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Reached { attempts, .. } | Self::Gone { attempts } => *attempts,
        }
    }

    /// Check if the resource disappeared
    pub fn is_gone(&self) -> bool {
        matches!(self, Self::Gone { .. })
    }

    /// Final resource, if the wait ended on a lookup result
    pub fn resource(&self) -> Option<&R> {
        match self {
            Self::Reached { resource, .. } => Some(resource),
            Self::Gone { .. } => None,
        }
    }

    /// Take the final resource
    pub fn into_resource(self) -> Option<R> {
        match self {
            Self::Reached { resource, .. } => Some(resource),
            Self::Gone { .. } => None,
        }
    }
}
