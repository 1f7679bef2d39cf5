//! Poll-until-state loop

use super::progress::ProgressMarks;
use super::types::{Stateful, WaitOutcome, WaitPolicy};
use crate::error::{Error, Result};
use std::future::Future;
use std::io::{self, Write};
use tracing::debug;

/// Polls a resource until it reaches a desired state
#[derive(Debug)]
pub struct StateWaiter<W = io::Stderr> {
    kind: String,
    policy: WaitPolicy,
    sink: W,
}

impl StateWaiter<io::Stderr> {
    /// Create a waiter writing progress to stderr with the default policy.
    ///
    /// `kind` names the resource in error messages, e.g. "action".
    pub fn new(kind: impl Into<String>) -> Self {
        Self::with_sink(kind, io::stderr())
    }
}

impl<W: Write> StateWaiter<W> {
    /// Create a waiter writing progress to `sink`
    pub fn with_sink(kind: impl Into<String>, sink: W) -> Self {
        Self {
            kind: kind.into(),
            policy: WaitPolicy::default(),
            sink,
        }
    }

    /// Replace the polling policy
    #[must_use]
    pub fn with_policy(mut self, policy: WaitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Policy in effect
    pub fn policy(&self) -> &WaitPolicy {
        &self.policy
    }

    /// Progress sink
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Take back the progress sink
    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Poll `lookup` until resource `id` reports `desired`.
    ///
    /// A lookup error ends the wait immediately and is returned unchanged,
    /// except that a not-found error is success when `not_found_ok` is set.
    /// Reaching the policy's error state or running out of attempts is an
    /// error. A `.` is written before every lookup but the first.
    pub async fn wait<R, F, Fut>(
        &mut self,
        mut lookup: F,
        id: &str,
        desired: &str,
        not_found_ok: bool,
    ) -> Result<WaitOutcome<R>>
    where
        R: Stateful,
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        let mut marks = ProgressMarks::new(&mut self.sink);
        let mut attempts: u32 = 0;

        for attempt in 1..=self.policy.max_attempts {
            if attempts != 0 {
                marks.mark();
            }

            let resource = match lookup(id.to_string()).await {
                Ok(resource) => resource,
                Err(e) if not_found_ok && e.is_not_found() => {
                    debug!(kind = %self.kind, id, attempt, "Resource gone");
                    return Ok(WaitOutcome::Gone { attempts: attempt });
                }
                Err(e) => return Err(e),
            };

            let state = resource.state();
            debug!(kind = %self.kind, id, attempt, state, "Polled state");

            if state == self.policy.error_state {
                return Err(Error::WaitErrorState {
                    kind: self.kind.clone(),
                    id: id.to_string(),
                    state: self.policy.error_state.clone(),
                });
            }

            if state == desired {
                return Ok(WaitOutcome::Reached {
                    resource,
                    attempts: attempt,
                });
            }

            attempts += 1;
            tokio::time::sleep(self.policy.delay).await;
        }

        debug!(
            kind = %self.kind,
            id,
            markers = marks.emitted(),
            "Attempt budget exhausted"
        );
        Err(Error::WaitTimeout {
            kind: self.kind.clone(),
            id: id.to_string(),
            desired: desired.to_string(),
        })
    }
}
