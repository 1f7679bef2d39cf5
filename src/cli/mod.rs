//! CLI module
//!
//! Command-line interface over the droplet and VPC services.
//!
//! # Commands
//!
//! - `droplet` - list, inspect, create, and delete droplets
//! - `network interconnect-attachment` - manage partner interconnect attachments

mod commands;
mod context;
mod droplets;
mod network;
mod runner;

pub use commands::{
    AttachmentCommands, BackupPolicyCommands, Cli, Commands, DropletCommands, DropletCreateArgs,
    NetworkArgs, NetworkCommands,
};
pub use context::{CommandContext, Prompt, TerminalPrompt};
pub use network::{ensure_partner_attachment_type, wait_for_attachment, PARTNER_ATTACHMENT_TYPE};
pub use runner::Runner;
