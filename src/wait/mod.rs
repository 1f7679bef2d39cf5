//! State waiting module
//!
//! Polls a resource until it reaches a desired state.
//!
//! # Overview
//!
//! The wait module provides:
//! - `WaitPolicy` - attempt budget, delay, and error-state label
//! - `Stateful` - anything exposing a status string
//! - `StateWaiter` - the poll loop, writing progress dots to a sink
//! - `WaitOutcome` - how a successful wait ended

mod progress;
mod types;
mod waiter;

pub use types::{Stateful, WaitOutcome, WaitPolicy, DEFAULT_ERROR_STATE};
pub use waiter::StateWaiter;
