//! Column sets of the printable resources

use super::{Column, Row, Tabular};
use crate::api::{
    Action, Droplet, DropletBackupPolicy, Image, InterfaceType, Kernel,
    PartnerInterconnectAttachment, SupportedBackupPolicy,
};
use chrono::{DateTime, Utc};

fn timestamp(value: Option<&DateTime<Utc>>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

fn joined<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn row<const N: usize>(cells: [(&'static str, String); N]) -> Row {
    cells.into_iter().collect()
}

impl Tabular for Droplet {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", "ID"),
            Column::new("Name", "Name"),
            Column::new("PublicIPv4", "Public IPv4"),
            Column::new("PrivateIPv4", "Private IPv4"),
            Column::new("Memory", "Memory"),
            Column::new("VCPUs", "VCPUs"),
            Column::new("Disk", "Disk"),
            Column::new("Region", "Region"),
            Column::new("Image", "Image"),
            Column::new("VPCUUID", "VPC UUID"),
            Column::new("Status", "Status"),
            Column::new("Tags", "Tags"),
            Column::new("Features", "Features"),
            Column::new("Volumes", "Volumes"),
        ];
        COLUMNS
    }

    fn row(&self) -> Row {
        row([
            ("ID", self.id.to_string()),
            ("Name", self.name.clone()),
            (
                "PublicIPv4",
                self.ipv4(InterfaceType::Public).unwrap_or_default().to_string(),
            ),
            (
                "PrivateIPv4",
                self.ipv4(InterfaceType::Private).unwrap_or_default().to_string(),
            ),
            ("Memory", self.memory.to_string()),
            ("VCPUs", self.vcpus.to_string()),
            ("Disk", self.disk.to_string()),
            ("Region", self.region_slug().to_string()),
            ("Image", self.image_label()),
            ("VPCUUID", self.vpc_uuid.clone().unwrap_or_default()),
            ("Status", self.status.clone()),
            ("Tags", joined(&self.tags)),
            ("Features", joined(&self.features)),
            ("Volumes", joined(&self.volume_ids)),
        ])
    }
}

impl Tabular for Kernel {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", "ID"),
            Column::new("Name", "Name"),
            Column::new("Version", "Version"),
        ];
        COLUMNS
    }

    fn row(&self) -> Row {
        row([
            ("ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Version", self.version.clone()),
        ])
    }
}

impl Tabular for Image {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", "ID"),
            Column::new("Name", "Name"),
            Column::new("Type", "Type"),
            Column::new("Distribution", "Distribution"),
            Column::new("Slug", "Slug"),
            Column::new("Public", "Public"),
            Column::new("MinDisk", "Min Disk"),
        ];
        COLUMNS
    }

    fn row(&self) -> Row {
        row([
            ("ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Type", self.image_type.clone()),
            ("Distribution", self.distribution.clone()),
            ("Slug", self.slug.clone().unwrap_or_default()),
            ("Public", self.public.to_string()),
            ("MinDisk", self.min_disk_size.to_string()),
        ])
    }
}

impl Tabular for Action {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", "ID"),
            Column::new("Status", "Status"),
            Column::new("Type", "Type"),
            Column::new("StartedAt", "Started At"),
            Column::new("CompletedAt", "Completed At"),
            Column::new("ResourceID", "Resource ID"),
            Column::new("ResourceType", "Resource Type"),
            Column::new("Region", "Region"),
        ];
        COLUMNS
    }

    fn row(&self) -> Row {
        row([
            ("ID", self.id.to_string()),
            ("Status", self.status.clone()),
            ("Type", self.action_type.clone()),
            ("StartedAt", timestamp(self.started_at.as_ref())),
            ("CompletedAt", timestamp(self.completed_at.as_ref())),
            ("ResourceID", self.resource_id.to_string()),
            ("ResourceType", self.resource_type.clone()),
            ("Region", self.region_slug.clone().unwrap_or_default()),
        ])
    }
}

impl Tabular for DropletBackupPolicy {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("DropletID", "Droplet ID"),
            Column::new("BackupEnabled", "Backup Enabled"),
            Column::new("BackupPolicyPlan", "Backup Policy Plan"),
            Column::new("BackupPolicyWeekday", "Backup Policy Weekday"),
            Column::new("BackupPolicyHour", "Backup Policy Hour"),
            Column::new("BackupPolicyWindowLengthHours", "Backup Policy Window Length Hours"),
            Column::new("BackupPolicyRetentionPeriodDays", "Backup Policy Retention Period Days"),
            Column::new("NextWindowStart", "Next Window Start"),
            Column::new("NextWindowEnd", "Next Window End"),
        ];
        COLUMNS
    }

    fn row(&self) -> Row {
        let policy = self.backup_policy.clone().unwrap_or_default();
        let window = self.next_backup_window.as_ref();
        row([
            ("DropletID", self.droplet_id.to_string()),
            ("BackupEnabled", self.backup_enabled.to_string()),
            ("BackupPolicyPlan", policy.plan),
            ("BackupPolicyWeekday", policy.weekday),
            ("BackupPolicyHour", policy.hour.to_string()),
            (
                "BackupPolicyWindowLengthHours",
                policy.window_length_hours.to_string(),
            ),
            (
                "BackupPolicyRetentionPeriodDays",
                policy.retention_period_days.to_string(),
            ),
            ("NextWindowStart", timestamp(window.map(|w| &w.start))),
            ("NextWindowEnd", timestamp(window.map(|w| &w.end))),
        ])
    }
}

impl Tabular for SupportedBackupPolicy {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("Name", "Name"),
            Column::new("PossibleWindowStarts", "Possible Window Starts"),
            Column::new("WindowLengthHours", "Window Length Hours"),
            Column::new("RetentionPeriodDays", "Retention Period Days"),
            Column::new("PossibleDays", "Possible Days"),
        ];
        COLUMNS
    }

    fn row(&self) -> Row {
        row([
            ("Name", self.name.clone()),
            ("PossibleWindowStarts", joined(&self.possible_window_starts)),
            ("WindowLengthHours", self.window_length_hours.to_string()),
            ("RetentionPeriodDays", self.retention_period_days.to_string()),
            ("PossibleDays", joined(&self.possible_days)),
        ])
    }
}

impl Tabular for PartnerInterconnectAttachment {
    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("ID", "ID"),
            Column::new("Name", "Name"),
            Column::new("State", "State"),
            Column::new("ConnectionBandwidthInMbps", "Connection Bandwidth (MBPS)"),
            Column::new("Region", "Region"),
            Column::new("NaaSProvider", "NaaS Provider"),
            Column::new("VPCIDs", "VPC IDs"),
            Column::new("CreatedAt", "Created At"),
            Column::new("BGPLocalASN", "BGP Local ASN"),
            Column::new("BGPLocalRouterIP", "BGP Local Router IP"),
            Column::new("BGPPeerASN", "BGP Peer ASN"),
            Column::new("BGPPeerRouterIP", "BGP Peer Router IP"),
        ];
        COLUMNS
    }

    fn row(&self) -> Row {
        let bgp = self.bgp.clone().unwrap_or_default();
        row([
            ("ID", self.id.clone()),
            ("Name", self.name.clone()),
            ("State", self.state.clone()),
            (
                "ConnectionBandwidthInMbps",
                self.connection_bandwidth_in_mbps.to_string(),
            ),
            ("Region", self.region.clone()),
            ("NaaSProvider", self.naas_provider.clone()),
            ("VPCIDs", joined(&self.vpc_ids)),
            ("CreatedAt", timestamp(self.created_at.as_ref())),
            ("BGPLocalASN", bgp.local_asn.to_string()),
            ("BGPLocalRouterIP", bgp.local_router_ip),
            ("BGPPeerASN", bgp.peer_asn.to_string()),
            ("BGPPeerRouterIP", bgp.peer_router_ip),
        ])
    }
}
