//! API resource models
//!
//! Shapes of the resources returned by the droplet and partner
//! interconnect endpoints, plus the request bodies sent to them.

use crate::wait::Stateful;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Droplets
// ============================================================================

/// A virtual machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub memory: u64,
    #[serde(default)]
    pub vcpus: u32,
    #[serde(default)]
    pub disk: u64,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub image: Option<Image>,
    #[serde(default)]
    pub size_slug: String,
    #[serde(default)]
    pub networks: Option<Networks>,
    #[serde(default)]
    pub kernel: Option<Kernel>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub volume_ids: Vec<String>,
    #[serde(default)]
    pub vpc_uuid: Option<String>,
}

impl Droplet {
    /// First IPv4 address on the given interface
    pub fn ipv4(&self, interface: InterfaceType) -> Option<&str> {
        self.networks
            .as_ref()?
            .v4
            .iter()
            .find(|n| n.network_type == interface)
            .map(|n| n.ip_address.as_str())
    }

    /// IPv4 address per interface type
    pub fn ip_table(&self) -> BTreeMap<InterfaceType, String> {
        [InterfaceType::Public, InterfaceType::Private]
            .into_iter()
            .filter_map(|t| self.ipv4(t).map(|ip| (t, ip.to_string())))
            .collect()
    }

    /// Region slug, or empty
    pub fn region_slug(&self) -> &str {
        self.region.as_ref().map_or("", |r| r.slug.as_str())
    }

    /// Image label as `distribution name`, or empty
    pub fn image_label(&self) -> String {
        self.image
            .as_ref()
            .map(|i| format!("{} {}", i.distribution, i.name).trim().to_string())
            .unwrap_or_default()
    }
}

impl Stateful for Droplet {
    fn state(&self) -> &str {
        &self.status
    }
}

/// Network interface kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceType {
    Public,
    Private,
}

/// Attached networks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
    #[serde(default)]
    pub v6: Vec<NetworkV6>,
}

/// An IPv4 network attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkV4 {
    pub ip_address: String,
    #[serde(default)]
    pub netmask: String,
    #[serde(default)]
    pub gateway: String,
    #[serde(rename = "type")]
    pub network_type: InterfaceType,
}

/// An IPv6 network attachment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkV6 {
    pub ip_address: String,
    #[serde(default)]
    pub netmask: u32,
    #[serde(default)]
    pub gateway: String,
    #[serde(rename = "type")]
    pub network_type: InterfaceType,
}

/// A datacenter region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

/// A kernel a droplet can boot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kernel {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// A distribution image, snapshot, or backup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub image_type: String,
    #[serde(default)]
    pub distribution: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub min_disk_size: u64,
    #[serde(default)]
    pub size_gigabytes: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: String,
}

/// An asynchronous operation on a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: u64,
    pub status: String,
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resource_id: u64,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub region_slug: Option<String>,
}

impl Stateful for Action {
    fn state(&self) -> &str {
        &self.status
    }
}

/// Link to an action started by a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLink {
    pub id: u64,
    pub rel: String,
    pub href: String,
}

// ============================================================================
// Backup Policies
// ============================================================================

/// Backup schedule of a droplet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropletBackupPolicy {
    pub droplet_id: u64,
    #[serde(default)]
    pub backup_enabled: bool,
    #[serde(default)]
    pub backup_policy: Option<BackupPolicy>,
    #[serde(default)]
    pub next_backup_window: Option<BackupWindow>,
}

/// When and how often backups run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupPolicy {
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub weekday: String,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub window_length_hours: u32,
    #[serde(default)]
    pub retention_period_days: u32,
}

/// Time window of the next backup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A backup plan offered by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedBackupPolicy {
    pub name: String,
    #[serde(default)]
    pub possible_window_starts: Vec<u32>,
    #[serde(default)]
    pub window_length_hours: u32,
    #[serde(default)]
    pub retention_period_days: u32,
    #[serde(default)]
    pub possible_days: Vec<String>,
}

// ============================================================================
// Create Requests
// ============================================================================

/// Image to boot from: a numeric id or a slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Id(u64),
    Slug(String),
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        value
            .parse()
            .map_or_else(|_| Self::Slug(value.to_string()), Self::Id)
    }
}

/// Settings shared by single and multi-droplet creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropletSettings {
    pub region: String,
    pub size: String,
    pub image: ImageRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<String>,
    #[serde(default)]
    pub backups: bool,
    #[serde(default)]
    pub ipv6: bool,
    #[serde(default)]
    pub monitoring: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_uuid: Option<String>,
}

impl DropletSettings {
    /// Create settings with the required fields
    pub fn new(
        region: impl Into<String>,
        size: impl Into<String>,
        image: impl Into<ImageRef>,
    ) -> Self {
        Self {
            region: region.into(),
            size: size.into(),
            image: image.into(),
            ssh_keys: Vec::new(),
            backups: false,
            ipv6: false,
            monitoring: false,
            tags: Vec::new(),
            user_data: None,
            vpc_uuid: None,
        }
    }
}

/// Body of a single-droplet create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropletCreateRequest {
    pub name: String,
    #[serde(flatten)]
    pub settings: DropletSettings,
}

/// Body of a multi-droplet create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropletMultiCreateRequest {
    pub names: Vec<String>,
    #[serde(flatten)]
    pub settings: DropletSettings,
}

// ============================================================================
// Partner Interconnect Attachments
// ============================================================================

/// A private connection between VPCs and a network-as-a-service provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerInterconnectAttachment {
    pub id: String,
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub connection_bandwidth_in_mbps: u32,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub naas_provider: String,
    #[serde(default)]
    pub vpc_ids: Vec<String>,
    #[serde(default)]
    pub bgp: Option<Bgp>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Stateful for PartnerInterconnectAttachment {
    fn state(&self) -> &str {
        &self.state
    }
}

/// BGP session settings of an attachment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bgp {
    #[serde(default)]
    pub local_asn: u64,
    #[serde(default)]
    pub local_router_ip: String,
    #[serde(default)]
    pub peer_asn: u64,
    #[serde(default)]
    pub peer_router_ip: String,
}

/// Body of an attachment update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerInterconnectAttachmentUpdateRequest {
    pub name: String,
    pub vpc_ids: Vec<String>,
}
