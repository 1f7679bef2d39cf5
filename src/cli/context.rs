//! Shared state handed to every command handler

use crate::api::{DropletsService, VpcsService};
use crate::display::{self, DisplayOptions, Tabular};
use crate::error::{Error, Result};
use crate::wait::WaitPolicy;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Asks the user a yes/no question
pub trait Prompt: Send + Sync {
    /// Ask `message`; `true` means the user agreed
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Interactive prompt on the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| declined(&e))
    }
}

/// A prompt that cannot be answered counts as a refusal
pub(crate) fn declined(error: &dialoguer::Error) -> Error {
    debug!(%error, "Confirmation prompt failed");
    Error::Aborted
}

/// Services and settings for one command run
#[derive(Clone)]
pub struct CommandContext {
    /// Droplet endpoints
    pub droplets: Arc<dyn DropletsService>,
    /// VPC endpoints
    pub vpcs: Arc<dyn VpcsService>,
    /// How results are printed
    pub display: DisplayOptions,
    /// Polling policy for `--wait`
    pub wait_policy: WaitPolicy,
    /// Confirmation prompt for destructive commands
    pub prompt: Arc<dyn Prompt>,
}

impl CommandContext {
    /// Print `items` to `out` using the configured display options
    pub fn display<T: Tabular, W: Write>(&self, out: &mut W, items: &[T]) -> Result<()> {
        display::write(out, items, &self.display)
    }

    /// Ask before deleting `count` resources of kind `resource`
    pub fn confirm_delete(&self, resource: &str, count: usize) -> Result<bool> {
        let message = if count == 1 {
            format!("Warning: Are you sure you want to delete this {resource}?")
        } else {
            format!("Warning: Are you sure you want to delete {count} {resource}s?")
        };
        self.prompt.confirm(&message)
    }

    /// Print a status line to stderr
    pub fn notice(&self, message: &str) {
        eprintln!("Notice: {message}");
    }
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("display", &self.display)
            .field("wait_policy", &self.wait_policy)
            .finish_non_exhaustive()
    }
}
