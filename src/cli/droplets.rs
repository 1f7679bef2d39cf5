//! `droplet` handlers

use super::commands::{BackupPolicyCommands, DropletCommands, DropletCreateArgs};
use super::context::CommandContext;
use crate::api::{DropletCreateRequest, DropletMultiCreateRequest, DropletSettings};
use crate::error::{Error, Result};
use std::io::Write;
use tracing::info;

/// Run a `droplet` subcommand
pub async fn run<W: Write>(
    ctx: &CommandContext,
    command: &DropletCommands,
    out: &mut W,
) -> Result<()> {
    let droplets = &ctx.droplets;

    match command {
        DropletCommands::List { tag_name, gpus } => {
            let list = match (tag_name, gpus) {
                (Some(_), true) => {
                    return Err(Error::invalid_argument(
                        "--tag-name and --gpus cannot be combined",
                    ))
                }
                (Some(tag), false) => droplets.list_by_tag(tag).await?,
                (None, true) => droplets.list_with_gpus().await?,
                (None, false) => droplets.list().await?,
            };
            ctx.display(out, &list)
        }
        DropletCommands::Get { id } => {
            let droplet = droplets.get(*id).await?;
            ctx.display(out, &[droplet])
        }
        DropletCommands::Create(args) => create(ctx, args, out).await,
        DropletCommands::Delete {
            ids,
            tag_name,
            force,
        } => delete(ctx, ids, tag_name.as_deref(), *force).await,
        DropletCommands::Kernels { id } => ctx.display(out, &droplets.kernels(*id).await?),
        DropletCommands::Snapshots { id } => ctx.display(out, &droplets.snapshots(*id).await?),
        DropletCommands::Backups { id } => ctx.display(out, &droplets.backups(*id).await?),
        DropletCommands::Actions { id } => ctx.display(out, &droplets.actions(*id).await?),
        DropletCommands::Neighbors { id } => ctx.display(out, &droplets.neighbors(*id).await?),
        DropletCommands::BackupPolicies { command } => match command {
            BackupPolicyCommands::Get { id } => {
                let policy = droplets.backup_policy(*id).await?;
                ctx.display(out, &[policy])
            }
            BackupPolicyCommands::List => {
                ctx.display(out, &droplets.list_backup_policies().await?)
            }
            BackupPolicyCommands::ListSupported => {
                ctx.display(out, &droplets.list_supported_backup_policies().await?)
            }
        },
    }
}

fn settings_from(args: &DropletCreateArgs) -> DropletSettings {
    let mut settings = DropletSettings::new(&args.region, &args.size, args.image.as_str());
    settings.ssh_keys.clone_from(&args.ssh_keys);
    settings.backups = args.enable_backups;
    settings.ipv6 = args.enable_ipv6;
    settings.monitoring = args.enable_monitoring;
    settings.tags.clone_from(&args.tags);
    settings.user_data.clone_from(&args.user_data);
    settings.vpc_uuid.clone_from(&args.vpc_uuid);
    settings
}

async fn create<W: Write>(ctx: &CommandContext, args: &DropletCreateArgs, out: &mut W) -> Result<()> {
    let settings = settings_from(args);

    let created = if let [name] = args.names.as_slice() {
        let request = DropletCreateRequest {
            name: name.clone(),
            settings,
        };
        vec![ctx.droplets.create(&request, args.wait).await?]
    } else {
        let request = DropletMultiCreateRequest {
            names: args.names.clone(),
            settings,
        };
        ctx.droplets.create_multiple(&request, args.wait).await?
    };

    ctx.display(out, &created)
}

async fn delete(ctx: &CommandContext, ids: &[u64], tag: Option<&str>, force: bool) -> Result<()> {
    if let Some(tag) = tag {
        let tagged = ctx.droplets.list_by_tag(tag).await?;
        if tagged.is_empty() {
            ctx.notice(&format!(
                "Nothing to delete: no Droplets are using the \"{tag}\" tag"
            ));
            return Ok(());
        }
        if !(force || ctx.confirm_delete("Droplet", tagged.len())?) {
            return Err(Error::Aborted);
        }
        ctx.droplets.delete_by_tag(tag).await?;
        info!(tag, count = tagged.len(), "Droplets deleted by tag");
        return Ok(());
    }

    if ids.is_empty() {
        return Err(Error::invalid_argument(
            "provide at least one droplet ID or --tag-name",
        ));
    }

    if !(force || ctx.confirm_delete("Droplet", ids.len())?) {
        return Err(Error::Aborted);
    }

    for id in ids {
        ctx.droplets.delete(*id).await?;
        info!(id, "Droplet deleted");
    }
    Ok(())
}
