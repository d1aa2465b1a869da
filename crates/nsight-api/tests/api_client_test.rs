#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nsight_api::{ApiClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(
        &server.uri(),
        SecretString::from("test-key".to_owned()),
        &TransportConfig::default(),
    )
    .unwrap();
    (server, client)
}

fn xml(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_owned(), "text/xml")
}

// ── Listing tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_list_clients() {
    let (server, client) = setup().await;

    let body = r"<?xml version='1.0' encoding='ISO-8859-1'?>
<result created='2024-06-15T10:30:00' host='dashboard' status='OK'>
  <items>
    <client><clientid>1</clientid><name>Acme</name></client>
    <client><clientid>2</clientid><name>Globex</name></client>
  </items>
</result>";

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("service", "list_clients"))
        .and(query_param("apikey", "test-key"))
        .respond_with(xml(body))
        .mount(&server)
        .await;

    let clients = client.list_clients().await.unwrap();

    assert_eq!(clients.len(), 2);
    assert_eq!(clients[0].client_id, 1);
    assert_eq!(clients[0].name, "Acme");
    assert_eq!(clients[1].client_id, 2);
    assert_eq!(clients[1].name, "Globex");
}

#[tokio::test]
async fn test_list_sites_passes_client_id() {
    let (server, client) = setup().await;

    let body = r"<result>
  <items>
    <site><siteid>10</siteid><name>HQ</name></site>
  </items>
</result>";

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("service", "list_sites"))
        .and(query_param("clientid", "1"))
        .respond_with(xml(body))
        .mount(&server)
        .await;

    let sites = client.list_sites(1).await.unwrap();

    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].site_id, 10);
    assert_eq!(sites[0].name, "HQ");
}

#[tokio::test]
async fn test_list_servers_full_record() {
    let (server, client) = setup().await;

    let body = r"<result>
  <items>
    <server>
      <serverid>100</serverid>
      <name>web-01</name>
      <os>Windows Server 2022</os>
      <ip>10.0.0.5</ip>
      <online>1</online>
      <user>svc-web</user>
      <manufacturer>Dell Inc.</manufacturer>
      <model>PowerEdge R650</model>
      <device_serial>ABC1234</device_serial>
      <last_boot_time>1718445000</last_boot_time>
    </server>
  </items>
</result>";

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("service", "list_servers"))
        .and(query_param("siteid", "10"))
        .respond_with(xml(body))
        .mount(&server)
        .await;

    let servers = client.list_servers(10).await.unwrap();

    assert_eq!(servers.len(), 1);
    let s = &servers[0];
    assert_eq!(s.server_id, 100);
    assert_eq!(s.name, "web-01");
    assert_eq!(s.online, 1);
    assert_eq!(s.device_serial, "ABC1234");
    assert_eq!(s.last_boot_time, "1718445000");
}

#[tokio::test]
async fn test_empty_body_is_empty_list() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("service", "list_workstations"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;

    let workstations = client.list_workstations(10).await.unwrap();
    assert!(workstations.is_empty());
}

#[tokio::test]
async fn test_missing_items_element_is_empty_list() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("service", "list_servers"))
        .respond_with(xml("<result status='OK'></result>"))
        .mount(&server)
        .await;

    let servers = client.list_servers(10).await.unwrap();
    assert!(servers.is_empty());
}

// ── Asset details ───────────────────────────────────────────────────

#[tokio::test]
async fn test_device_asset_details() {
    let (server, client) = setup().await;

    let body = r"<result>
  <client>Acme</client>
  <chassistype>Desktop</chassistype>
  <ip>10.0.0.9</ip>
  <manufacturer>Lenovo</manufacturer>
  <model>ThinkCentre</model>
  <os>Windows 11 Pro</os>
  <serialnumber>SN-77</serialnumber>
  <role>workstation</role>
  <ram>17179869184</ram>
  <scantime>2024-06-15 03:00:00</scantime>
  <custom1><name>Asset Tag</name><value>IT-0099</value></custom1>
  <hardware>
    <item>
      <hardwareid>7</hardwareid>
      <name>Intel(R) Ethernet</name>
      <type>4</type>
      <manufacturer>Intel</manufacturer>
      <details>PCI bus 1</details>
      <status>OK</status>
      <deleted>0</deleted>
      <modified>0</modified>
    </item>
  </hardware>
  <software>
    <item>
      <softwareid>42</softwareid>
      <name>7-Zip</name>
      <version>23.01</version>
      <installdate>2024-01-02</installdate>
      <type>application</type>
      <deleted>0</deleted>
      <modified>1</modified>
    </item>
  </software>
</result>";

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("service", "list_device_asset_details"))
        .and(query_param("deviceid", "200"))
        .respond_with(xml(body))
        .mount(&server)
        .await;

    let details = client.device_asset_details(200).await.unwrap();

    assert_eq!(details.client, "Acme");
    assert_eq!(details.chassis_type, "Desktop");
    assert_eq!(details.ram, 17_179_869_184);
    assert_eq!(details.custom1.name, "Asset Tag");
    assert_eq!(details.custom1.value, "IT-0099");
    assert_eq!(details.custom2.name, "");
    assert_eq!(details.hardware.len(), 1);
    assert_eq!(details.hardware[0].hardware_id, 7);
    assert_eq!(details.hardware[0].hardware_type, 4);
    assert_eq!(details.software.len(), 1);
    assert_eq!(details.software[0].name, "7-Zip");
    assert_eq!(details.software[0].modified, 1);
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_non_2xx_is_hard_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("invalid api key"))
        .mount(&server)
        .await;

    let result = client.list_clients().await;

    match result {
        Err(Error::Status {
            ref service,
            status,
            ref body,
        }) => {
            assert_eq!(service, "list_clients");
            assert_eq!(status, 403);
            assert!(body.contains("invalid api key"));
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_xml_carries_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(xml("<result><items><client><clientid>not-closed"))
        .mount(&server)
        .await;

    let result = client.list_clients().await;

    match result {
        Err(Error::Decode { ref body, .. }) => {
            assert!(body.contains("not-closed"));
        }
        other => panic!("expected Decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_mutation_returns_unit() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("service", "clear_check"))
        .and(query_param("checkid", "555"))
        .respond_with(xml("<result status='OK'/>"))
        .mount(&server)
        .await;

    client.clear_check(555).await.unwrap();
}

#[tokio::test]
async fn test_invalid_server_rejected() {
    let result = ApiClient::new(
        "",
        SecretString::from("k".to_owned()),
        &TransportConfig::default(),
    );
    assert!(matches!(result, Err(Error::InvalidServer { .. })));
}
