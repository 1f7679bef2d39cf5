//! `network interconnect-attachment` handlers

use super::commands::{AttachmentCommands, NetworkArgs, NetworkCommands};
use super::context::CommandContext;
use crate::api::PartnerInterconnectAttachmentUpdateRequest;
use crate::error::{Error, Result};
use crate::wait::StateWaiter;
use std::io::Write;
use tracing::info;

/// Only attachment type the API offers
pub const PARTNER_ATTACHMENT_TYPE: &str = "partner";

const ATTACHMENT_KIND: &str = "Partner Interconnect Attachment";

/// Reject attachment types other than `partner`
pub fn ensure_partner_attachment_type(attachment_type: &str) -> Result<()> {
    if attachment_type == PARTNER_ATTACHMENT_TYPE {
        Ok(())
    } else {
        Err(Error::UnsupportedAttachmentType(attachment_type.to_string()))
    }
}

/// Run a `network` subcommand
pub async fn run<W: Write>(ctx: &CommandContext, args: &NetworkArgs, out: &mut W) -> Result<()> {
    ensure_partner_attachment_type(&args.attachment_type)?;

    let NetworkCommands::InterconnectAttachment { command } = &args.command;
    match command {
        AttachmentCommands::Get { id } => {
            let attachment = ctx.vpcs.get_partner_interconnect_attachment(id).await?;
            ctx.display(out, &[attachment])
        }
        AttachmentCommands::List => {
            let attachments = ctx.vpcs.list_partner_interconnect_attachments().await?;
            ctx.display(out, &attachments)
        }
        AttachmentCommands::Update { id, name, vpc_ids } => {
            let request = PartnerInterconnectAttachmentUpdateRequest {
                name: name.clone(),
                vpc_ids: vpc_ids.split(',').map(String::from).collect(),
            };
            let attachment = ctx
                .vpcs
                .update_partner_interconnect_attachment(id, &request)
                .await?;
            info!(id = %attachment.id, "Attachment updated");
            ctx.display(out, &[attachment])
        }
        AttachmentCommands::Delete { id, force, wait } => delete(ctx, id, *force, *wait).await,
    }
}

async fn delete(ctx: &CommandContext, id: &str, force: bool, wait: bool) -> Result<()> {
    if !(force || ctx.confirm_delete(ATTACHMENT_KIND, 1)?) {
        return Err(Error::Aborted);
    }

    ctx.vpcs.delete_partner_interconnect_attachment(id).await?;
    info!(id, "Attachment deletion requested");

    if !wait {
        ctx.notice("Partner Interconnect Attachment deletion request accepted");
        return Ok(());
    }

    ctx.notice(
        "Partner Interconnect Attachment is in progress, waiting for Partner Interconnect Attachment to be deleted",
    );
    wait_for_attachment(ctx, id, "DELETED", true)
        .await
        .map_err(|e| Error::Other(format!("{ATTACHMENT_KIND} couldn't be deleted : {e}")))?;
    ctx.notice("Partner Interconnect Attachment is successfully deleted");
    Ok(())
}

/// Poll an attachment until it reaches `desired`, or until Ctrl-C
pub async fn wait_for_attachment(
    ctx: &CommandContext,
    id: &str,
    desired: &str,
    not_found_ok: bool,
) -> Result<()> {
    let vpcs = &ctx.vpcs;
    let mut waiter = StateWaiter::new(ATTACHMENT_KIND).with_policy(ctx.wait_policy.clone());
    let wait = waiter.wait(
        move |id| async move { vpcs.get_partner_interconnect_attachment(&id).await },
        id,
        desired,
        not_found_ok,
    );

    tokio::select! {
        outcome = wait => outcome.map(|_| ()),
        _ = tokio::signal::ctrl_c() => Err(Error::Interrupted {
            kind: ATTACHMENT_KIND.to_string(),
            id: id.to_string(),
        }),
    }
}
