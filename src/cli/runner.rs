//! CLI runner - executes commands

use super::commands::{Cli, Commands};
use super::context::{CommandContext, Prompt, TerminalPrompt};
use super::{droplets, network};
use crate::api::Client;
use crate::config::{Config, ConfigOverrides};
use crate::display::DisplayOptions;
use crate::error::Result;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parsed command line
    pub fn cli(&self) -> &Cli {
        &self.cli
    }

    /// Resolve the effective configuration from file, environment, and flags
    pub fn load_config(&self) -> Result<Config> {
        let overrides = ConfigOverrides {
            access_token: self.cli.access_token.clone(),
            api_url: self.cli.api_url.clone(),
            output: self.cli.output,
        };
        Config::load(self.cli.config.as_deref(), overrides)
    }

    /// Build the services and settings a command needs
    pub fn context(&self, config: &Config, prompt: Arc<dyn Prompt>) -> Result<CommandContext> {
        let client = Client::from_config(config)?;
        let display = DisplayOptions::new(config.output)
            .with_format(self.cli.format.as_deref())
            .with_no_header(self.cli.no_header);

        Ok(CommandContext {
            droplets: client.droplets,
            vpcs: client.vpcs,
            display,
            wait_policy: config.wait.policy(),
            prompt,
        })
    }

    /// Run the CLI command, printing results to stdout
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        debug!(api_url = %config.api_url, "Loaded configuration");
        let ctx = self.context(&config, Arc::new(TerminalPrompt))?;

        let mut stdout = std::io::stdout().lock();
        self.run_with(&ctx, &mut stdout).await
    }

    /// Run the CLI command against an explicit context and output
    pub async fn run_with<W: Write>(&self, ctx: &CommandContext, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Droplet { command } => droplets::run(ctx, command, out).await,
            Commands::Network(args) => network::run(ctx, args, out).await,
        }
    }
}
