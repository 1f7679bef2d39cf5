//! CLI commands and argument parsing

use crate::types::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for droplets and partner interconnect attachments
#[derive(Parser, Debug)]
#[command(name = "oceanctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API access token
    #[arg(short = 't', long, global = true)]
    pub access_token: Option<String>,

    /// API base URL
    #[arg(short = 'u', long, global = true)]
    pub api_url: Option<String>,

    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    pub output: Option<OutputFormat>,

    /// Columns to display, comma-separated (e.g. ID,Name)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Omit the table header
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage droplets
    #[command(visible_alias = "d")]
    Droplet {
        #[command(subcommand)]
        command: DropletCommands,
    },

    /// Manage network products
    Network(NetworkArgs),
}

// ============================================================================
// Droplets
// ============================================================================

/// Droplet subcommands
#[derive(Subcommand, Debug)]
pub enum DropletCommands {
    /// List droplets
    #[command(visible_alias = "ls")]
    List {
        /// Only droplets carrying this tag
        #[arg(long)]
        tag_name: Option<String>,

        /// Only GPU droplets
        #[arg(long)]
        gpus: bool,
    },

    /// Show one droplet
    #[command(visible_alias = "g")]
    Get {
        /// Droplet ID
        id: u64,
    },

    /// Create one or more droplets
    #[command(visible_alias = "c")]
    Create(DropletCreateArgs),

    /// Delete droplets by ID or by tag
    #[command(visible_alias = "rm")]
    Delete {
        /// Droplet IDs
        ids: Vec<u64>,

        /// Delete every droplet carrying this tag
        #[arg(long, conflicts_with = "ids")]
        tag_name: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List kernels available to a droplet
    Kernels {
        /// Droplet ID
        id: u64,
    },

    /// List snapshots of a droplet
    Snapshots {
        /// Droplet ID
        id: u64,
    },

    /// List backups of a droplet
    Backups {
        /// Droplet ID
        id: u64,
    },

    /// List actions run on a droplet
    Actions {
        /// Droplet ID
        id: u64,
    },

    /// List droplets on the same physical host
    Neighbors {
        /// Droplet ID
        id: u64,
    },

    /// Inspect backup policies
    BackupPolicies {
        #[command(subcommand)]
        command: BackupPolicyCommands,
    },
}

/// Arguments of `droplet create`
#[derive(Args, Debug)]
pub struct DropletCreateArgs {
    /// Droplet names
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Region slug
    #[arg(long)]
    pub region: String,

    /// Size slug
    #[arg(long)]
    pub size: String,

    /// Image ID or slug
    #[arg(long)]
    pub image: String,

    /// Tag to apply (repeatable)
    #[arg(long = "tag-name")]
    pub tags: Vec<String>,

    /// SSH key IDs or fingerprints, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub ssh_keys: Vec<String>,

    /// Enable automated backups
    #[arg(long)]
    pub enable_backups: bool,

    /// Enable IPv6
    #[arg(long)]
    pub enable_ipv6: bool,

    /// Enable the monitoring agent
    #[arg(long)]
    pub enable_monitoring: bool,

    /// Cloud-init user data
    #[arg(long)]
    pub user_data: Option<String>,

    /// VPC to place the droplet in
    #[arg(long)]
    pub vpc_uuid: Option<String>,

    /// Block until creation completes
    #[arg(long)]
    pub wait: bool,
}

/// Backup policy subcommands
#[derive(Subcommand, Debug)]
pub enum BackupPolicyCommands {
    /// Show the backup policy of a droplet
    Get {
        /// Droplet ID
        id: u64,
    },

    /// List backup policies of every droplet
    #[command(visible_alias = "ls")]
    List,

    /// List the backup plans the API supports
    ListSupported,
}

// ============================================================================
// Network
// ============================================================================

/// Arguments of `network`
#[derive(Args, Debug)]
pub struct NetworkArgs {
    /// Interconnect attachment type
    #[arg(long = "type", global = true, default_value = "partner")]
    pub attachment_type: String,

    #[command(subcommand)]
    pub command: NetworkCommands,
}

/// Network subcommands
#[derive(Subcommand, Debug)]
pub enum NetworkCommands {
    /// Manage interconnect attachments
    InterconnectAttachment {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
}

/// Interconnect attachment subcommands
#[derive(Subcommand, Debug)]
pub enum AttachmentCommands {
    /// Show one attachment
    #[command(visible_alias = "g")]
    Get {
        /// Attachment ID
        id: String,
    },

    /// List attachments
    #[command(visible_alias = "ls")]
    List,

    /// Rename an attachment and replace its VPCs
    #[command(visible_alias = "u")]
    Update {
        /// Attachment ID
        id: String,

        /// New name
        #[arg(long)]
        name: String,

        /// VPC IDs, comma-separated
        #[arg(long)]
        vpc_ids: String,
    },

    /// Delete an attachment
    #[command(visible_alias = "rm")]
    Delete {
        /// Attachment ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,

        /// Block until the attachment is gone
        #[arg(long)]
        wait: bool,
    },
}
