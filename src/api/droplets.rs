//! Droplet endpoints

use super::models::{
    Action, ActionLink, Droplet, DropletBackupPolicy, DropletCreateRequest,
    DropletMultiCreateRequest, Image, Kernel, SupportedBackupPolicy,
};
use super::{item_from_body, list_all, page_from_body, response_from_body};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{Page, Paginator, DEFAULT_PER_PAGE};
use crate::types::JsonValue;
use crate::wait::{StateWaiter, WaitPolicy};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

const DROPLETS_PATH: &str = "/v2/droplets";

/// Operations on droplets
#[async_trait]
pub trait DropletsService: Send + Sync {
    /// All droplets
    async fn list(&self) -> Result<Vec<Droplet>>;

    /// Droplets carrying a tag
    async fn list_by_tag(&self, tag: &str) -> Result<Vec<Droplet>>;

    /// GPU droplets only
    async fn list_with_gpus(&self) -> Result<Vec<Droplet>>;

    /// One droplet by id
    async fn get(&self, id: u64) -> Result<Droplet>;

    /// Create a droplet, optionally blocking until its create action completes
    async fn create(&self, request: &DropletCreateRequest, wait: bool) -> Result<Droplet>;

    /// Create several droplets sharing the same settings, optionally blocking
    /// until every create action completes
    async fn create_multiple(
        &self,
        request: &DropletMultiCreateRequest,
        wait: bool,
    ) -> Result<Vec<Droplet>>;

    /// Delete a droplet by id
    async fn delete(&self, id: u64) -> Result<()>;

    /// Delete every droplet carrying a tag
    async fn delete_by_tag(&self, tag: &str) -> Result<()>;

    /// Kernels available to a droplet
    async fn kernels(&self, id: u64) -> Result<Vec<Kernel>>;

    /// Snapshots of a droplet
    async fn snapshots(&self, id: u64) -> Result<Vec<Image>>;

    /// Backups of a droplet
    async fn backups(&self, id: u64) -> Result<Vec<Image>>;

    /// Actions run on a droplet
    async fn actions(&self, id: u64) -> Result<Vec<Action>>;

    /// Droplets sharing a physical host with this one
    async fn neighbors(&self, id: u64) -> Result<Vec<Droplet>>;

    /// Backup policy of one droplet
    async fn backup_policy(&self, id: u64) -> Result<DropletBackupPolicy>;

    /// Backup policies of every droplet
    async fn list_backup_policies(&self) -> Result<Vec<DropletBackupPolicy>>;

    /// Backup plans the API supports
    async fn list_supported_backup_policies(&self) -> Result<Vec<SupportedBackupPolicy>>;
}

/// [`DropletsService`] over the REST API
#[derive(Debug, Clone)]
pub struct HttpDropletsService {
    client: Arc<HttpClient>,
    per_page: u32,
    wait_policy: WaitPolicy,
}

impl HttpDropletsService {
    /// Create the service with default page size and wait policy
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self {
            client,
            per_page: DEFAULT_PER_PAGE,
            wait_policy: WaitPolicy::default(),
        }
    }

    /// Set the page size for list calls
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Set the policy used when waiting on create actions
    #[must_use]
    pub fn with_wait_policy(mut self, policy: WaitPolicy) -> Self {
        self.wait_policy = policy;
        self
    }

    async fn list_path<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        filters: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        list_all(&self.client, path, key, filters, self.per_page).await
    }

    /// Block until the action at `href` completes
    async fn wait_for_action(&self, href: &str) -> Result<()> {
        let client = &self.client;
        let mut waiter = StateWaiter::new("action")
            .with_policy(self.wait_policy.clone().with_error_state("errored"));

        waiter
            .wait(
                move |url| async move {
                    let body: JsonValue = client.get_json(&url).await?;
                    item_from_body::<Action>(body, "action")
                },
                href,
                "completed",
                false,
            )
            .await?;
        Ok(())
    }
}

/// Hrefs of the `create` actions linked from a create response
fn create_action_hrefs(body: &JsonValue) -> Vec<String> {
    let Some(actions) = body.get("links").and_then(|l| l.get("actions")) else {
        return Vec::new();
    };
    serde_json::from_value::<Vec<ActionLink>>(actions.clone())
        .unwrap_or_default()
        .into_iter()
        .filter(|link| link.rel == "create")
        .map(|link| link.href)
        .collect()
}

#[async_trait]
impl DropletsService for HttpDropletsService {
    async fn list(&self) -> Result<Vec<Droplet>> {
        self.list_path(DROPLETS_PATH, "droplets", &[]).await
    }

    async fn list_by_tag(&self, tag: &str) -> Result<Vec<Droplet>> {
        self.list_path(DROPLETS_PATH, "droplets", &[("tag_name", tag)])
            .await
    }

    async fn list_with_gpus(&self) -> Result<Vec<Droplet>> {
        self.list_path(DROPLETS_PATH, "droplets", &[("type", "gpus")])
            .await
    }

    async fn get(&self, id: u64) -> Result<Droplet> {
        let body: JsonValue = self
            .client
            .get_json(&format!("{DROPLETS_PATH}/{id}"))
            .await?;
        item_from_body(body, "droplet")
    }

    async fn create(&self, request: &DropletCreateRequest, wait: bool) -> Result<Droplet> {
        let body: JsonValue = self.client.post_json(DROPLETS_PATH, request).await?;
        let href = create_action_hrefs(&body).into_iter().next();
        let droplet: Droplet = item_from_body(body, "droplet")?;
        info!(id = droplet.id, name = %droplet.name, "Droplet created");

        if !wait {
            return Ok(droplet);
        }

        let Some(href) = href else {
            warn!(id = droplet.id, "Create response has no create action to wait on");
            return Ok(droplet);
        };

        if let Err(e) = self.wait_for_action(&href).await {
            warn!(id = droplet.id, error = %e, "Waiting for droplet create failed");
        }

        self.get(droplet.id).await
    }

    async fn create_multiple(
        &self,
        request: &DropletMultiCreateRequest,
        wait: bool,
    ) -> Result<Vec<Droplet>> {
        let body: JsonValue = self.client.post_json(DROPLETS_PATH, request).await?;
        let hrefs = create_action_hrefs(&body);
        let droplets: Vec<Droplet> = item_from_body(body, "droplets")?;
        info!(count = droplets.len(), "Droplets created");

        if !wait {
            return Ok(droplets);
        }

        for href in &hrefs {
            if let Err(e) = self.wait_for_action(href).await {
                warn!(action = %href, error = %e, "Waiting for droplet create failed");
            }
        }

        let mut refreshed = Vec::with_capacity(droplets.len());
        for droplet in droplets {
            refreshed.push(self.get(droplet.id).await?);
        }
        Ok(refreshed)
    }

    async fn delete(&self, id: u64) -> Result<()> {
        self.client.delete(&format!("{DROPLETS_PATH}/{id}")).await
    }

    async fn delete_by_tag(&self, tag: &str) -> Result<()> {
        self.client
            .delete_with_config(DROPLETS_PATH, RequestConfig::new().query("tag_name", tag))
            .await
    }

    async fn kernels(&self, id: u64) -> Result<Vec<Kernel>> {
        self.list_path(&format!("{DROPLETS_PATH}/{id}/kernels"), "kernels", &[])
            .await
    }

    async fn snapshots(&self, id: u64) -> Result<Vec<Image>> {
        self.list_path(&format!("{DROPLETS_PATH}/{id}/snapshots"), "snapshots", &[])
            .await
    }

    async fn backups(&self, id: u64) -> Result<Vec<Image>> {
        self.list_path(&format!("{DROPLETS_PATH}/{id}/backups"), "backups", &[])
            .await
    }

    async fn actions(&self, id: u64) -> Result<Vec<Action>> {
        self.list_path(&format!("{DROPLETS_PATH}/{id}/actions"), "actions", &[])
            .await
    }

    async fn neighbors(&self, id: u64) -> Result<Vec<Droplet>> {
        let body: JsonValue = self
            .client
            .get_json(&format!("{DROPLETS_PATH}/{id}/neighbors"))
            .await?;
        let page: Page<Droplet> = page_from_body(body, "droplets")?;
        Ok(page.items)
    }

    async fn backup_policy(&self, id: u64) -> Result<DropletBackupPolicy> {
        let body: JsonValue = self
            .client
            .get_json(&format!("{DROPLETS_PATH}/{id}/backups/policy"))
            .await?;
        item_from_body(body, "policy")
    }

    async fn list_backup_policies(&self) -> Result<Vec<DropletBackupPolicy>> {
        let client = &self.client;
        let path = format!("{DROPLETS_PATH}/backups/policies");
        let path = path.as_str();

        Paginator::new()
            .per_page(self.per_page)
            .collect(move |options| async move {
                let mut request = RequestConfig::new();
                for (name, value) in options.query() {
                    request = request.query(name, value);
                }
                let body: JsonValue = client.get_json_with_config(path, request).await?;
                policies_page(body)
            })
            .await
    }

    async fn list_supported_backup_policies(&self) -> Result<Vec<SupportedBackupPolicy>> {
        let body: JsonValue = self
            .client
            .get_json(&format!("{DROPLETS_PATH}/backups/supported_policies"))
            .await?;
        item_from_body(body, "supported_policies")
    }
}

/// Decode one page of the policies endpoint, whose items are keyed by droplet id
fn policies_page(mut body: JsonValue) -> Result<Page<DropletBackupPolicy>> {
    let policies: BTreeMap<String, DropletBackupPolicy> =
        match body.get_mut("policies").map(JsonValue::take) {
            Some(JsonValue::Null) | None => BTreeMap::new(),
            Some(value) => serde_json::from_value(value)?,
        };
    let mut items: Vec<DropletBackupPolicy> = policies.into_values().collect();
    items.sort_by_key(|p| p.droplet_id);
    Ok(Page::new(items, response_from_body(body)))
}
