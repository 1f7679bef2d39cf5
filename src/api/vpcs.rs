//! VPC endpoints: partner interconnect attachments

use super::models::{PartnerInterconnectAttachment, PartnerInterconnectAttachmentUpdateRequest};
use super::{item_from_body, list_all};
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::DEFAULT_PER_PAGE;
use crate::types::JsonValue;
use async_trait::async_trait;
use std::sync::Arc;

const ATTACHMENTS_PATH: &str = "/v2/partner_interconnect/attachments";

/// Operations on partner interconnect attachments
#[async_trait]
pub trait VpcsService: Send + Sync {
    /// All attachments
    async fn list_partner_interconnect_attachments(
        &self,
    ) -> Result<Vec<PartnerInterconnectAttachment>>;

    /// One attachment by id
    async fn get_partner_interconnect_attachment(
        &self,
        id: &str,
    ) -> Result<PartnerInterconnectAttachment>;

    /// Rename an attachment and replace its VPC list
    async fn update_partner_interconnect_attachment(
        &self,
        id: &str,
        request: &PartnerInterconnectAttachmentUpdateRequest,
    ) -> Result<PartnerInterconnectAttachment>;

    /// Start deleting an attachment
    async fn delete_partner_interconnect_attachment(&self, id: &str) -> Result<()>;
}

/// [`VpcsService`] over the REST API
#[derive(Debug, Clone)]
pub struct HttpVpcsService {
    client: Arc<HttpClient>,
    per_page: u32,
}

impl HttpVpcsService {
    /// Create the service with the default page size
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self {
            client,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Set the page size for list calls
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }
}

#[async_trait]
impl VpcsService for HttpVpcsService {
    async fn list_partner_interconnect_attachments(
        &self,
    ) -> Result<Vec<PartnerInterconnectAttachment>> {
        list_all(
            &self.client,
            ATTACHMENTS_PATH,
            "partner_interconnect_attachments",
            &[],
            self.per_page,
        )
        .await
    }

    async fn get_partner_interconnect_attachment(
        &self,
        id: &str,
    ) -> Result<PartnerInterconnectAttachment> {
        let body: JsonValue = self
            .client
            .get_json(&format!("{ATTACHMENTS_PATH}/{id}"))
            .await?;
        item_from_body(body, "partner_interconnect_attachment")
    }

    async fn update_partner_interconnect_attachment(
        &self,
        id: &str,
        request: &PartnerInterconnectAttachmentUpdateRequest,
    ) -> Result<PartnerInterconnectAttachment> {
        let body: JsonValue = self
            .client
            .patch_json(&format!("{ATTACHMENTS_PATH}/{id}"), request)
            .await?;
        item_from_body(body, "partner_interconnect_attachment")
    }

    async fn delete_partner_interconnect_attachment(&self, id: &str) -> Result<()> {
        self.client
            .delete(&format!("{ATTACHMENTS_PATH}/{id}"))
            .await
    }
}
