#![allow(clippy::unwrap_used)]
// Round-trip test: a live walk writes the cache as a side effect, and
// reassembling from that cache must reproduce the live tree exactly.
// With asset tables removed, the cache tree may only lose asset details,
// never gain or change anything else.

use pretty_assertions::assert_eq;
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nsight_api::{ApiClient, TransportConfig};
use nsight_core::store::{CacheWriter, Table, read_table};
use nsight_core::{CacheSource, LiveSource, assemble};

fn xml(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_owned(), "text/xml")
}

async fn mock_service(server: &MockServer, service: &str, extra: &[(&str, &str)], body: &str) {
    let mut mock = Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("service", service));
    for (key, value) in extra {
        mock = mock.and(query_param(*key, *value));
    }
    mock.respond_with(xml(body)).mount(server).await;
}

async fn mount_dashboard(server: &MockServer) {
    mock_service(
        server,
        "list_clients",
        &[],
        r"<result><items>
            <client><clientid>1</clientid><name>Acme</name></client>
            <client><clientid>2</clientid><name>Globex</name></client>
          </items></result>",
    )
    .await;

    mock_service(
        server,
        "list_sites",
        &[("clientid", "1")],
        r"<result><items>
            <site><siteid>10</siteid><name>HQ</name></site>
          </items></result>",
    )
    .await;
    mock_service(
        server,
        "list_sites",
        &[("clientid", "2")],
        r"<result><items>
            <site><siteid>20</siteid><name>Plant</name></site>
          </items></result>",
    )
    .await;

    mock_service(
        server,
        "list_servers",
        &[("siteid", "10")],
        r"<result><items>
            <server>
              <serverid>100</serverid><name>web-01</name>
              <os>Windows Server 2022</os><ip>10.0.0.5</ip>
              <online>1</online><user>svc-web</user>
              <manufacturer>Dell Inc.</manufacturer><model>R650</model>
              <device_serial>ABC1234</device_serial>
              <last_boot_time>1718445000</last_boot_time>
            </server>
          </items></result>",
    )
    .await;
    mock_service(server, "list_servers", &[("siteid", "20")], "<result/>").await;

    mock_service(
        server,
        "list_workstations",
        &[("siteid", "10")],
        r"<result><items>
            <workstation>
              <workstationid>200</workstationid><name>desk-07</name>
              <os>Windows 11</os><ip>10.0.0.9</ip>
              <online>0</online><user>jdoe</user>
              <last_boot_time>0</last_boot_time>
            </workstation>
          </items></result>",
    )
    .await;
    mock_service(server, "list_workstations", &[("siteid", "20")], "<result/>").await;

    // Server 100 has a full asset bundle; workstation 200 was never scanned.
    mock_service(
        server,
        "list_device_asset_details",
        &[("deviceid", "100")],
        r"<result>
            <client>Acme</client>
            <chassistype>Rack Mount Chassis</chassistype>
            <ip>10.0.0.5</ip>
            <manufacturer>Dell Inc.</manufacturer>
            <model>R650</model>
            <os>Windows Server 2022</os>
            <serialnumber>ABC1234</serialnumber>
            <role>server</role>
            <ram>68719476736</ram>
            <scantime>2024-06-15 03:00:00</scantime>
            <custom1><name>Asset Tag</name><value>IT-0042</value></custom1>
            <hardware>
              <item>
                <hardwareid>7</hardwareid><name>PERC H755</name><type>5</type>
                <manufacturer>Dell</manufacturer><details>Slot 2</details>
                <status>OK</status><deleted>0</deleted><modified>0</modified>
              </item>
            </hardware>
            <software>
              <item>
                <softwareid>42</softwareid><name>SQL Server</name>
                <version>2022</version><installdate>2024-01-02</installdate>
                <type>application</type><deleted>0</deleted><modified>0</modified>
              </item>
            </software>
          </result>",
    )
    .await;
    mock_service(
        server,
        "list_device_asset_details",
        &[("deviceid", "200")],
        "",
    )
    .await;
}

fn api_for(server: &MockServer) -> ApiClient {
    ApiClient::new(
        &server.uri(),
        SecretString::from("test-key".to_owned()),
        &TransportConfig::default(),
    )
    .unwrap()
}

#[tokio::test]
async fn live_and_cache_trees_are_identical() {
    let server = MockServer::start().await;
    mount_dashboard(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let cache = CacheWriter::open(dir.path()).unwrap();
    let mut live = LiveSource::new(api_for(&server), cache);
    let live_tree = assemble(&mut live).await.unwrap();
    live.finish();

    // The live walk produced a complete, ordered tree.
    assert_eq!(live_tree.len(), 2);
    assert_eq!(live_tree[0].client_name, "Acme");
    assert_eq!(live_tree[1].client_name, "Globex");
    let hq = &live_tree[0].sites[0];
    assert!(hq.servers[0].detail.asset.is_some());
    assert!(hq.workstations[0].detail.asset.is_none());

    // Cache rows store the raw boot time, unformatted.
    let server_rows = read_table(dir.path(), Table::Servers).unwrap();
    assert_eq!(server_rows[0].get(9), Some("1718445000"));
    // ...while the assembled tree carries the formatted rendering.
    assert_ne!(hq.servers[0].detail.last_boot_time, "1718445000");
    assert!(!hq.servers[0].detail.last_boot_time.is_empty());

    // Reassembling from the written cache reproduces the live tree.
    let mut cached = CacheSource::load(dir.path()).unwrap();
    let cache_tree = assemble(&mut cached).await.unwrap();
    assert_eq!(live_tree, cache_tree);
}

#[tokio::test]
async fn missing_asset_tables_degrade_to_a_subset() {
    let server = MockServer::start().await;
    mount_dashboard(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let cache = CacheWriter::open(dir.path()).unwrap();
    let mut live = LiveSource::new(api_for(&server), cache);
    let live_tree = assemble(&mut live).await.unwrap();
    live.finish();

    std::fs::remove_file(dir.path().join("asset_summary.csv")).unwrap();

    let mut cached = CacheSource::load(dir.path()).unwrap();
    let cache_tree = assemble(&mut cached).await.unwrap();

    // Everything except asset details must be unchanged...
    let mut stripped = live_tree.clone();
    for client in &mut stripped {
        for site in &mut client.sites {
            for s in &mut site.servers {
                s.detail.asset = None;
            }
            for w in &mut site.workstations {
                w.detail.asset = None;
            }
        }
    }
    assert_eq!(stripped, cache_tree);

    // ...and no device may have gained a bundle the live tree lacked.
    for (live_client, cached_client) in live_tree.iter().zip(&cache_tree) {
        for (live_site, cached_site) in live_client.sites.iter().zip(&cached_client.sites) {
            for (l, c) in live_site.servers.iter().zip(&cached_site.servers) {
                assert!(l.detail.asset.is_some() || c.detail.asset.is_none());
            }
        }
    }
}
