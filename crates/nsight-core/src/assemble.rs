//! The hierarchy assembler.
//!
//! One sequential walk over an [`InventorySource`] produces the ordered
//! forest of client nodes. The walk is identical for live and cache
//! sourcing; only the source differs. Client order follows the source's
//! listing order (not map iteration), so output is deterministic and a
//! cache reload reproduces the live tree.
//!
//! Partial-failure policy:
//! - the top-level client listing failing is fatal;
//! - a sites failure skips that client's whole subtree;
//! - a servers/workstations/asset failure degrades to "data unavailable"
//!   for that site or device and the walk continues.

use tracing::{info, warn};

use crate::convert::{server_node, workstation_node};
use crate::error::CoreError;
use crate::source::InventorySource;
use crate::tree::{ClientNode, ServerNode, SiteNode, WorkstationNode};

/// Build the full client forest from `source`.
pub async fn assemble<S: InventorySource>(source: &mut S) -> Result<Vec<ClientNode>, CoreError> {
    let clients = source.clients().await?;
    info!(count = clients.len(), "assembling client hierarchy");

    let mut forest = Vec::with_capacity(clients.len());
    for client in clients {
        let sites = match source.sites(client.client_id).await {
            Ok(sites) => sites,
            Err(e) => {
                warn!(
                    client_id = client.client_id,
                    error = %e,
                    "failed to fetch sites, skipping client"
                );
                continue;
            }
        };

        let mut site_nodes = Vec::with_capacity(sites.len());
        for site in sites {
            let servers = source
                .servers(site.site_id, client.client_id)
                .await
                .unwrap_or_else(|e| {
                    warn!(site_id = site.site_id, error = %e, "failed to fetch servers");
                    Vec::new()
                });
            let workstations = source
                .workstations(site.site_id, client.client_id)
                .await
                .unwrap_or_else(|e| {
                    warn!(site_id = site.site_id, error = %e, "failed to fetch workstations");
                    Vec::new()
                });

            let mut server_nodes: Vec<ServerNode> = Vec::with_capacity(servers.len());
            for server in &servers {
                let asset = lookup_asset(source, server.server_id).await;
                server_nodes.push(server_node(server, asset));
            }

            let mut workstation_nodes: Vec<WorkstationNode> =
                Vec::with_capacity(workstations.len());
            for workstation in &workstations {
                let asset = lookup_asset(source, workstation.workstation_id).await;
                workstation_nodes.push(workstation_node(workstation, asset));
            }

            site_nodes.push(SiteNode {
                site_id: site.site_id,
                site_name: site.name,
                servers: server_nodes,
                workstations: workstation_nodes,
            });
        }

        forest.push(ClientNode {
            client_id: client.client_id,
            client_name: client.name,
            sites: site_nodes,
        });
        source.checkpoint();
    }

    Ok(forest)
}

/// Asset lookup with the degrade-to-absent policy applied.
async fn lookup_asset<S: InventorySource>(
    source: &mut S,
    device_id: i64,
) -> Option<nsight_api::models::AssetDetails> {
    match source.asset(device_id).await {
        Ok(asset) => asset,
        Err(e) => {
            warn!(device_id, error = %e, "failed to fetch asset details");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use csv::StringRecord;
    use pretty_assertions::assert_eq;

    use crate::source::CacheSource;
    use crate::store::CacheTables;

    use super::*;

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    fn server_row<'a>(
        id: &'a str,
        name: &'a str,
        online: &'a str,
        boot: &'a str,
        site_id: &'a str,
    ) -> Vec<&'a str> {
        vec![
            id, name, "Linux", "10.0.0.1", online, "root", "Dell", "R650", "SN", boot, site_id,
            "1",
        ]
    }

    fn base_tables() -> CacheTables {
        CacheTables {
            clients: vec![record(&["1", "Acme"])],
            sites: vec![record(&["10", "HQ", "1"])],
            servers: vec![record(&server_row("100", "web-01", "1", "0", "10"))],
            workstations: vec![],
            asset_summary: None,
            hardware: None,
            software: None,
        }
    }

    fn asset_summary_row(device_id: &str) -> StringRecord {
        let mut fields = vec![
            device_id, "Acme", "Desktop", "10.0.0.9", "aa:bb", "", "", "jdoe", "Lenovo",
            "ThinkCentre", "Windows 11", "SN-77", "", "server", "", "8589934592",
            "2024-06-15 03:00:00",
        ];
        // ten custom name/value pairs
        fields.extend(std::iter::repeat_n("", 20));
        StringRecord::from(fields)
    }

    #[tokio::test]
    async fn end_to_end_cache_scenario() {
        // One client, one site, one server, no asset tables.
        let mut source = CacheSource::from_tables(&base_tables());
        let forest = assemble(&mut source).await.expect("assemble");

        assert_eq!(forest.len(), 1);
        let client = &forest[0];
        assert_eq!(client.client_id, 1);
        assert_eq!(client.client_name, "Acme");
        assert_eq!(client.sites.len(), 1);

        let site = &client.sites[0];
        assert_eq!(site.site_id, 10);
        assert_eq!(site.site_name, "HQ");
        assert_eq!(site.servers.len(), 1);
        assert!(site.workstations.is_empty());

        let server = &site.servers[0];
        assert_eq!(server.id, 100);
        assert!(server.detail.online);
        assert_eq!(server.detail.last_boot_time, "");
        assert!(server.detail.asset.is_none());

        // Serialized form: boot time and empty collections are omitted.
        let json = serde_json::to_value(&forest).expect("serialize");
        let server_json = &json[0]["sites"][0]["servers"][0];
        assert_eq!(server_json["online"], serde_json::json!(true));
        assert!(server_json.get("last_boot_time").is_none());
        assert!(server_json.get("asset_details").is_none());
        assert!(json[0]["sites"][0].get("workstations").is_none());
    }

    #[tokio::test]
    async fn asset_bundle_attaches_by_device_id() {
        let mut tables = base_tables();
        tables.servers.push(record(&server_row(
            "101",
            "db-01",
            "0",
            "1718445000",
            "10",
        )));
        tables.asset_summary = Some(vec![asset_summary_row("100")]);
        tables.hardware = Some(vec![record(&[
            "100", "7", "NIC", "4", "Intel", "PCI bus 1", "OK", "0", "0",
        ])]);
        tables.software = Some(vec![
            record(&["100", "42", "7-Zip", "23.01", "2024-01-02", "application", "0", "1"]),
            record(&["999", "43", "orphan", "1.0", "", "", "0", "0"]),
        ]);

        let mut source = CacheSource::from_tables(&tables);
        let forest = assemble(&mut source).await.expect("assemble");
        let site = &forest[0].sites[0];

        let with_asset = &site.servers[0];
        let asset = with_asset.detail.asset.as_ref().expect("asset bundle");
        assert_eq!(asset.manufacturer, "Lenovo");
        assert_eq!(asset.ram, 8_589_934_592);
        assert_eq!(asset.hardware.len(), 1);
        assert_eq!(asset.hardware[0].name, "NIC");
        assert_eq!(asset.software.len(), 1);
        assert_eq!(asset.software[0].name, "7-Zip");

        // Device 101 has no summary row, so no bundle at all.
        assert!(site.servers[1].detail.asset.is_none());
    }

    #[tokio::test]
    async fn malformed_rows_are_skipped_not_fatal() {
        let mut tables = base_tables();
        // Short row, non-numeric id, non-numeric online, non-numeric site id.
        tables.servers.push(record(&["101", "too-short"]));
        tables.servers.push(record(&server_row("abc", "bad-id", "1", "0", "10")));
        tables
            .servers
            .push(record(&server_row("102", "bad-online", "yes", "0", "10")));
        tables
            .servers
            .push(record(&server_row("103", "bad-site", "1", "0", "x")));
        tables.servers.push(record(&server_row("104", "ok", "0", "0", "10")));

        let mut source = CacheSource::from_tables(&tables);
        let forest = assemble(&mut source).await.expect("assemble");
        let site = &forest[0].sites[0];

        let names: Vec<&str> = site.servers.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["web-01", "ok"]);
    }

    #[tokio::test]
    async fn asset_lookup_ignores_device_kind() {
        // Servers and workstations share one device-id space upstream,
        // and the asset tables carry no kind column. A server and a
        // workstation with the same id therefore resolve to the same
        // bundle.
        let mut tables = base_tables();
        tables.workstations.push(record(&[
            "100", "desk-01", "Windows 11", "10.0.0.2", "0", "jdoe", "", "", "", "0", "10", "1",
        ]));
        tables.asset_summary = Some(vec![asset_summary_row("100")]);

        let mut source = CacheSource::from_tables(&tables);
        let forest = assemble(&mut source).await.expect("assemble");
        let site = &forest[0].sites[0];

        let server_asset = site.servers[0].detail.asset.as_ref().expect("server bundle");
        let ws_asset = site.workstations[0]
            .detail
            .asset
            .as_ref()
            .expect("workstation bundle");
        assert_eq!(server_asset, ws_asset);
    }

    #[tokio::test]
    async fn orphaned_sites_and_devices_are_dropped() {
        let mut tables = base_tables();
        tables.sites.push(record(&["11", "orphan-site", "99"]));
        tables
            .servers
            .push(record(&server_row("105", "orphan-server", "1", "0", "77")));

        let mut source = CacheSource::from_tables(&tables);
        let forest = assemble(&mut source).await.expect("assemble");

        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].sites.len(), 1);
        assert_eq!(forest[0].sites[0].servers.len(), 1);
    }

    #[tokio::test]
    async fn cache_assembly_is_deterministic() {
        let mut tables = base_tables();
        tables.clients.push(record(&["2", "Globex"]));
        tables.clients.push(record(&["3", "Initech"]));

        let forest_a = assemble(&mut CacheSource::from_tables(&tables))
            .await
            .expect("assemble");
        let forest_b = assemble(&mut CacheSource::from_tables(&tables))
            .await
            .expect("assemble");

        assert_eq!(forest_a, forest_b);
        // Clients preserve table order, not id-map order.
        let ids: Vec<i64> = forest_a.iter().map(|c| c.client_id).collect();
        assert_eq!(ids, [1, 2, 3]);

        let json_a = serde_json::to_string_pretty(&forest_a).expect("serialize");
        let json_b = serde_json::to_string_pretty(&forest_b).expect("serialize");
        assert_eq!(json_a, json_b, "repeat assembly must be byte-identical");
    }
}
