//! Tests for the API services

use super::*;
use crate::pagination::NextPage;
use crate::wait::WaitPolicy;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http_for(server: &MockServer) -> Arc<HttpClient> {
    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .access_token("test-token")
        .build();
    Arc::new(HttpClient::with_config(config).unwrap())
}

fn droplets_for(server: &MockServer) -> HttpDropletsService {
    HttpDropletsService::new(http_for(server))
        .with_per_page(2)
        .with_wait_policy(WaitPolicy::default().with_delay(Duration::ZERO))
}

fn droplet_json(id: u64, name: &str, status: &str) -> JsonValue {
    json!({
        "id": id,
        "name": name,
        "memory": 1024,
        "vcpus": 1,
        "disk": 25,
        "locked": false,
        "status": status,
        "created_at": "2024-03-01T10:00:00Z",
        "region": {"slug": "nyc3", "name": "New York 3", "available": true},
        "image": {"id": 7, "name": "24.04 (LTS) x64", "distribution": "Ubuntu", "type": "base"},
        "size_slug": "s-1vcpu-1gb",
        "networks": {
            "v4": [
                {"ip_address": "10.128.0.2", "netmask": "255.255.0.0", "gateway": "", "type": "private"},
                {"ip_address": "203.0.113.5", "netmask": "255.255.240.0", "gateway": "203.0.113.1", "type": "public"}
            ],
            "v6": []
        },
        "tags": ["web"],
        "features": [],
        "volume_ids": []
    })
}

fn attachment_json(id: &str, state: &str) -> JsonValue {
    json!({
        "id": id,
        "name": "pia-1",
        "state": state,
        "connection_bandwidth_in_mbps": 1000,
        "region": "nyc",
        "naas_provider": "MEGAPORT",
        "vpc_ids": ["vpc-1", "vpc-2"],
        "bgp": {
            "local_asn": 64532,
            "local_router_ip": "169.254.0.1/29",
            "peer_asn": 133937,
            "peer_router_ip": "169.254.0.6/29"
        },
        "created_at": "2024-05-01T00:00:00Z"
    })
}

// ============================================================================
// Envelope Tests
// ============================================================================

#[test]
fn test_item_from_body_missing_key() {
    let err = item_from_body::<Droplet>(json!({"other": {}}), "droplet").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("`droplet`"));
}

#[test]
fn test_page_from_body_reads_links() {
    let body = json!({
        "kernels": [{"id": 1, "name": "k1", "version": "6.1"}],
        "links": {"pages": {"last": "https://api.example.com/v2/droplets/1/kernels?page=3&per_page=1"}},
        "meta": {"total": 3}
    });
    let page: Page<Kernel> = page_from_body(body, "kernels").unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.response.meta.as_ref().and_then(|m| m.total), Some(3));
    assert_eq!(page.response.next_page(1), NextPage::Continue(2));
}

#[test]
fn test_page_from_body_null_items() {
    let page: Page<Kernel> = page_from_body(json!({"kernels": null}), "kernels").unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.response.next_page(1), NextPage::Done);
}

#[test]
fn test_droplet_helpers() {
    let droplet: Droplet = serde_json::from_value(droplet_json(1, "web-1", "active")).unwrap();

    assert_eq!(droplet.ipv4(InterfaceType::Public), Some("203.0.113.5"));
    assert_eq!(droplet.ipv4(InterfaceType::Private), Some("10.128.0.2"));
    assert_eq!(droplet.ip_table().len(), 2);
    assert_eq!(droplet.region_slug(), "nyc3");
    assert_eq!(droplet.image_label(), "Ubuntu 24.04 (LTS) x64");
}

#[test]
fn test_image_ref_from_str() {
    assert_eq!(ImageRef::from("12345"), ImageRef::Id(12345));
    assert_eq!(
        ImageRef::from("ubuntu-24-04-x64"),
        ImageRef::Slug("ubuntu-24-04-x64".to_string())
    );
}

#[test]
fn test_create_request_flattens_settings() {
    let request = DropletCreateRequest {
        name: "web-1".to_string(),
        settings: DropletSettings::new("nyc3", "s-1vcpu-1gb", "ubuntu-24-04-x64"),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "name": "web-1",
            "region": "nyc3",
            "size": "s-1vcpu-1gb",
            "image": "ubuntu-24-04-x64",
            "backups": false,
            "ipv6": false,
            "monitoring": false
        })
    );
}

// ============================================================================
// Droplet Service Tests
// ============================================================================

#[test]
fn test_page_from_body_badly_typed_meta_ends_listing() {
    let body = json!({"droplets": [], "links": {}, "meta": {"total": "many"}});
    let page: Page<Droplet> = page_from_body(body, "droplets").unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.response.next_page(1), NextPage::Done);
}

#[test]
fn test_page_from_body_badly_typed_last_ends_listing() {
    let body = json!({
        "droplets": [droplet_json(1, "a", "active")],
        "links": {"pages": {"last": 5}}
    });
    let page: Page<Droplet> = page_from_body(body, "droplets").unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.response.next_page(1), NextPage::Done);
}

#[tokio::test]
async fn test_list_droplets_malformed_metadata_fetches_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(1, "a", "active"), droplet_json(2, "b", "active")],
            "links": {"pages": {"last": 5}},
            "meta": {"total": "many"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let droplets = droplets_for(&server).list().await.unwrap();
    assert_eq!(droplets.len(), 2);
}

#[tokio::test]
async fn test_backup_policies_malformed_metadata_fetches_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/backups/policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "policies": {},
            "links": {"pages": {"next": 2}},
            "meta": {"total": -1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let policies = droplets_for(&server).list_backup_policies().await.unwrap();
    assert!(policies.is_empty());
}

#[tokio::test]
async fn test_list_droplets_follows_pages() {
    let server = MockServer::start().await;
    let next = format!("{}/v2/droplets?page=2&per_page=2", server.uri());

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(1, "a", "active"), droplet_json(2, "b", "active")],
            "links": {"pages": {"next": next, "last": next}},
            "meta": {"total": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(3, "c", "off")],
            "links": {"pages": {"first": format!("{}/v2/droplets?page=1", server.uri())}},
            "meta": {"total": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let droplets = droplets_for(&server).list().await.unwrap();
    let ids: Vec<u64> = droplets.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_droplets_error_discards_pages() {
    let server = MockServer::start().await;
    let next = format!("{}/v2/droplets?page=2", server.uri());

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(1, "a", "active")],
            "links": {"pages": {"next": next}}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "id": "server_error",
            "message": "Server was unable to give you a response."
        })))
        .mount(&server)
        .await;

    let err = droplets_for(&server).list().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "HTTP 500: Server was unable to give you a response."
    );
}

#[tokio::test]
async fn test_list_droplets_by_tag_and_gpus() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .and(query_param("tag_name", "web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(1, "a", "active")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets"))
        .and(query_param("type", "gpus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(2, "gpu", "active"), droplet_json(3, "gpu2", "active")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = droplets_for(&server);
    assert_eq!(service.list_by_tag("web").await.unwrap().len(), 1);
    assert_eq!(service.list_with_gpus().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_droplet_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "id": "not_found",
            "message": "The resource you were accessing could not be found."
        })))
        .mount(&server)
        .await;

    let err = droplets_for(&server).get(404).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_create_without_wait_skips_action() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .and(body_json(json!({
            "name": "web-1",
            "region": "nyc3",
            "size": "s-1vcpu-1gb",
            "image": "ubuntu-24-04-x64",
            "backups": false,
            "ipv6": false,
            "monitoring": false
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "droplet": droplet_json(10, "web-1", "new"),
            "links": {"actions": [{"id": 99, "rel": "create", "href": format!("{}/v2/actions/99", server.uri())}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/actions/99"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = DropletCreateRequest {
        name: "web-1".to_string(),
        settings: DropletSettings::new("nyc3", "s-1vcpu-1gb", "ubuntu-24-04-x64"),
    };
    let droplet = droplets_for(&server).create(&request, false).await.unwrap();
    assert_eq!(droplet.id, 10);
    assert_eq!(droplet.status, "new");
}

#[tokio::test]
async fn test_create_with_wait_polls_action_then_refetches() {
    let server = MockServer::start().await;
    let href = format!("{}/v2/actions/99", server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "droplet": droplet_json(10, "web-1", "new"),
            "links": {"actions": [
                {"id": 98, "rel": "other", "href": format!("{}/v2/actions/98", server.uri())},
                {"id": 99, "rel": "create", "href": href}
            ]}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/actions/99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "action": {"id": 99, "status": "in-progress", "type": "create", "resource_id": 10}
        })))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/actions/99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "action": {"id": 99, "status": "completed", "type": "create", "resource_id": 10}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplet": droplet_json(10, "web-1", "active")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = DropletCreateRequest {
        name: "web-1".to_string(),
        settings: DropletSettings::new("nyc3", "s-1vcpu-1gb", "ubuntu-24-04-x64"),
    };
    let droplet = droplets_for(&server).create(&request, true).await.unwrap();
    assert_eq!(droplet.status, "active");
}

#[tokio::test]
async fn test_create_with_wait_errored_action_still_refetches() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "droplet": droplet_json(10, "web-1", "new"),
            "links": {"actions": [{"id": 99, "rel": "create", "href": format!("{}/v2/actions/99", server.uri())}]}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/actions/99"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "action": {"id": 99, "status": "errored", "type": "create"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplet": droplet_json(10, "web-1", "off")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = DropletCreateRequest {
        name: "web-1".to_string(),
        settings: DropletSettings::new("nyc3", "s-1vcpu-1gb", "ubuntu-24-04-x64"),
    };
    let droplet = droplets_for(&server).create(&request, true).await.unwrap();
    assert_eq!(droplet.status, "off");
}

#[tokio::test]
async fn test_create_multiple() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .and(body_json(json!({
            "names": ["a", "b"],
            "region": "nyc3",
            "size": "s-1vcpu-1gb",
            "image": 7,
            "backups": false,
            "ipv6": false,
            "monitoring": false,
            "tags": ["web"]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "droplets": [droplet_json(1, "a", "new"), droplet_json(2, "b", "new")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut settings = DropletSettings::new("nyc3", "s-1vcpu-1gb", "7");
    settings.tags = vec!["web".to_string()];
    let request = DropletMultiCreateRequest {
        names: vec!["a".to_string(), "b".to_string()],
        settings,
    };
    let droplets = droplets_for(&server)
        .create_multiple(&request, false)
        .await
        .unwrap();
    assert_eq!(droplets.len(), 2);
}

#[tokio::test]
async fn test_create_multiple_with_wait_refetches_each() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/droplets"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "droplets": [droplet_json(1, "a", "new"), droplet_json(2, "b", "new")],
            "links": {"actions": [
                {"id": 51, "rel": "create", "href": format!("{}/v2/actions/51", server.uri())},
                {"id": 52, "rel": "create", "href": format!("{}/v2/actions/52", server.uri())}
            ]}
        })))
        .mount(&server)
        .await;

    for action in [51, 52] {
        Mock::given(method("GET"))
            .and(path(format!("/v2/actions/{action}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "action": {"id": action, "status": "completed", "type": "create"}
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    for id in [1, 2] {
        Mock::given(method("GET"))
            .and(path(format!("/v2/droplets/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "droplet": droplet_json(id, "x", "active")
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let request = DropletMultiCreateRequest {
        names: vec!["a".to_string(), "b".to_string()],
        settings: DropletSettings::new("nyc3", "s-1vcpu-1gb", "ubuntu-24-04-x64"),
    };
    let droplets = droplets_for(&server)
        .create_multiple(&request, true)
        .await
        .unwrap();
    let statuses: Vec<&str> = droplets.iter().map(|d| d.status.as_str()).collect();
    assert_eq!(statuses, vec!["active", "active"]);
}

#[tokio::test]
async fn test_delete_by_id_and_tag() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/droplets/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/droplets"))
        .and(query_param("tag_name", "staging"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let service = droplets_for(&server);
    service.delete(5).await.unwrap();
    service.delete_by_tag("staging").await.unwrap();
}

#[tokio::test]
async fn test_droplet_sub_resources() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/5/kernels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kernels": [{"id": 1, "name": "DigitalOcean GrubLoader v0.2", "version": "grub"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/5/snapshots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snapshots": [{"id": 11, "name": "snap", "type": "snapshot"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/5/backups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"backups": []})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/5/actions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "actions": [{"id": 3, "status": "completed", "type": "power_on"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/5/neighbors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "droplets": [droplet_json(6, "n", "active")]
        })))
        .mount(&server)
        .await;

    let service = droplets_for(&server);
    assert_eq!(service.kernels(5).await.unwrap()[0].version, "grub");
    assert_eq!(service.snapshots(5).await.unwrap()[0].image_type, "snapshot");
    assert!(service.backups(5).await.unwrap().is_empty());
    assert_eq!(service.actions(5).await.unwrap()[0].action_type, "power_on");
    assert_eq!(service.neighbors(5).await.unwrap()[0].id, 6);
}

#[tokio::test]
async fn test_backup_policies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/5/backups/policy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "policy": {
                "droplet_id": 5,
                "backup_enabled": true,
                "backup_policy": {"plan": "weekly", "weekday": "SUN", "hour": 20, "window_length_hours": 4, "retention_period_days": 28},
                "next_backup_window": {"start": "2024-10-06T20:00:00Z", "end": "2024-10-07T00:00:00Z"}
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/backups/policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "policies": {
                "9": {"droplet_id": 9, "backup_enabled": false},
                "5": {"droplet_id": 5, "backup_enabled": true}
            },
            "meta": {"total": 2}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/droplets/backups/supported_policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "supported_policies": [
                {"name": "weekly", "possible_window_starts": [0, 4, 8], "window_length_hours": 4, "retention_period_days": 28, "possible_days": ["SUN", "MON"]},
                {"name": "daily", "possible_window_starts": [0], "window_length_hours": 4, "retention_period_days": 7, "possible_days": []}
            ]
        })))
        .mount(&server)
        .await;

    let service = droplets_for(&server);

    let policy = service.backup_policy(5).await.unwrap();
    assert!(policy.backup_enabled);
    assert_eq!(policy.backup_policy.unwrap().weekday, "SUN");

    let policies = service.list_backup_policies().await.unwrap();
    let ids: Vec<u64> = policies.iter().map(|p| p.droplet_id).collect();
    assert_eq!(ids, vec![5, 9]);

    let supported = service.list_supported_backup_policies().await.unwrap();
    assert_eq!(supported.len(), 2);
    assert_eq!(supported[0].possible_window_starts, vec![0, 4, 8]);
}

// ============================================================================
// VPC Service Tests
// ============================================================================

#[tokio::test]
async fn test_attachment_list_get_update_delete() {
    let server = MockServer::start().await;
    let base = "/v2/partner_interconnect/attachments";

    Mock::given(method("GET"))
        .and(path(base))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "partner_interconnect_attachments": [attachment_json("a1", "ACTIVE")],
            "links": {},
            "meta": {"total": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{base}/a1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "partner_interconnect_attachment": attachment_json("a1", "ACTIVE")
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(format!("{base}/a1")))
        .and(body_json(json!({"name": "renamed", "vpc_ids": ["vpc-3"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "partner_interconnect_attachment": attachment_json("a1", "UPDATING")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("{base}/a1")))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpVpcsService::new(http_for(&server));

    let listed = service.list_partner_interconnect_attachments().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].naas_provider, "MEGAPORT");

    let fetched = service.get_partner_interconnect_attachment("a1").await.unwrap();
    assert_eq!(fetched.bgp.unwrap().peer_asn, 133_937);

    let request = PartnerInterconnectAttachmentUpdateRequest {
        name: "renamed".to_string(),
        vpc_ids: vec!["vpc-3".to_string()],
    };
    let updated = service
        .update_partner_interconnect_attachment("a1", &request)
        .await
        .unwrap();
    assert_eq!(updated.state, "UPDATING");

    service.delete_partner_interconnect_attachment("a1").await.unwrap();
}

#[test]
fn test_client_from_config() {
    let mut config = Config::default();
    let err = Client::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));

    config.access_token = Some("dop_v1_abc".to_string());
    let client = Client::from_config(&config).unwrap();
    let debug = format!("{:?}", client.droplets);
    assert!(debug.contains("api.digitalocean.com"));
    assert!(!debug.contains("dop_v1_abc"));
}
