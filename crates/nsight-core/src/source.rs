//! Dual-mode inventory sourcing.
//!
//! The assembler consumes one capability interface -- list clients, list
//! sites for a client, list devices for a site, get an asset bundle for a
//! device -- with two implementations: [`LiveSource`] over the remote API
//! and [`CacheSource`] over previously written tables. Both reconstruct
//! the same record shapes, so the assembler applies one set of
//! reconciliation and normalization rules regardless of mode.

use std::collections::HashMap;
use std::path::Path;

use csv::StringRecord;
use tracing::warn;

use nsight_api::ApiClient;
use nsight_api::models::{
    AssetDetails, Client, CustomField, HardwareItem, Server, Site, SoftwareItem, Workstation,
};

use crate::error::CoreError;
use crate::store::{CacheTables, CacheWriter, Table};

/// Capability interface over the entity hierarchy.
///
/// Error semantics are the caller's concern: the assembler treats a
/// `clients` failure as fatal, a `sites` failure as "skip this client",
/// and any other failure as "this data unavailable".
#[allow(async_fn_in_trait)]
pub trait InventorySource {
    /// Top-level client listing, in source order.
    async fn clients(&mut self) -> Result<Vec<Client>, CoreError>;

    /// Sites beneath one client, in source order.
    async fn sites(&mut self, client_id: i64) -> Result<Vec<Site>, CoreError>;

    /// Servers at one site, in source order.
    async fn servers(&mut self, site_id: i64, client_id: i64) -> Result<Vec<Server>, CoreError>;

    /// Workstations at one site, in source order.
    async fn workstations(
        &mut self,
        site_id: i64,
        client_id: i64,
    ) -> Result<Vec<Workstation>, CoreError>;

    /// Asset bundle for one device; `None` when the source has no data.
    async fn asset(&mut self, device_id: i64) -> Result<Option<AssetDetails>, CoreError>;

    /// Durability checkpoint, called after each client subtree.
    fn checkpoint(&mut self);
}

// ── Live source ──────────────────────────────────────────────────────

/// Sources records from the remote API, mirroring every fetched record
/// into the cache store so a live run always leaves a reloadable cache.
pub struct LiveSource {
    api: ApiClient,
    cache: CacheWriter,
}

impl LiveSource {
    pub fn new(api: ApiClient, cache: CacheWriter) -> Self {
        Self { api, cache }
    }

    /// Flush and close the cache tables once assembly is done.
    pub fn finish(self) {
        self.cache.finish();
    }
}

impl InventorySource for LiveSource {
    async fn clients(&mut self) -> Result<Vec<Client>, CoreError> {
        let clients = self.api.list_clients().await?;
        for client in &clients {
            self.cache.append_client(client);
        }
        Ok(clients)
    }

    async fn sites(&mut self, client_id: i64) -> Result<Vec<Site>, CoreError> {
        let sites = self.api.list_sites(client_id).await?;
        for site in &sites {
            self.cache.append_site(site, client_id);
        }
        Ok(sites)
    }

    async fn servers(&mut self, site_id: i64, client_id: i64) -> Result<Vec<Server>, CoreError> {
        let servers = self.api.list_servers(site_id).await?;
        for server in &servers {
            self.cache.append_server(server, site_id, client_id);
        }
        Ok(servers)
    }

    async fn workstations(
        &mut self,
        site_id: i64,
        client_id: i64,
    ) -> Result<Vec<Workstation>, CoreError> {
        let workstations = self.api.list_workstations(site_id).await?;
        for workstation in &workstations {
            self.cache.append_workstation(workstation, site_id, client_id);
        }
        Ok(workstations)
    }

    async fn asset(&mut self, device_id: i64) -> Result<Option<AssetDetails>, CoreError> {
        let details = self.api.device_asset_details(device_id).await?;
        if details.is_unscanned() {
            return Ok(None);
        }
        self.cache.append_asset(device_id, &details);
        Ok(Some(details))
    }

    fn checkpoint(&mut self) {
        self.cache.checkpoint();
    }
}

// ── Cache source ─────────────────────────────────────────────────────

/// Sources records from the flat cache tables.
///
/// All grouping maps are built up front from the loaded tables; the trait
/// methods only look records up, so they cannot fail. Malformed rows are
/// skipped with a warning during construction. Orphaned rows (a site
/// whose client never appears, a device whose site never appears) are
/// never reached by the walk and drop out of the output silently.
pub struct CacheSource {
    clients: Vec<Client>,
    sites_by_client: HashMap<i64, Vec<Site>>,
    servers_by_site: HashMap<i64, Vec<Server>>,
    workstations_by_site: HashMap<i64, Vec<Workstation>>,
    assets_by_device: HashMap<i64, AssetDetails>,
}

impl CacheSource {
    /// Load the tables beneath `dir` and build the lookup maps.
    pub fn load(dir: &Path) -> Result<Self, CoreError> {
        Ok(Self::from_tables(&CacheTables::load(dir)?))
    }

    /// Build a source from already-loaded tables.
    pub fn from_tables(tables: &CacheTables) -> Self {
        let mut clients = Vec::with_capacity(tables.clients.len());
        for row in &tables.clients {
            let Some(client) = parse_client(row) else {
                warn!(table = Table::Clients.name(), ?row, "skipping malformed cache row");
                continue;
            };
            clients.push(client);
        }

        let mut sites_by_client: HashMap<i64, Vec<Site>> = HashMap::new();
        for row in &tables.sites {
            let Some((client_id, site)) = parse_site(row) else {
                warn!(table = Table::Sites.name(), ?row, "skipping malformed cache row");
                continue;
            };
            sites_by_client.entry(client_id).or_default().push(site);
        }

        let mut servers_by_site: HashMap<i64, Vec<Server>> = HashMap::new();
        for row in &tables.servers {
            let Some((site_id, server)) = parse_server(row) else {
                warn!(table = Table::Servers.name(), ?row, "skipping malformed cache row");
                continue;
            };
            servers_by_site.entry(site_id).or_default().push(server);
        }

        let mut workstations_by_site: HashMap<i64, Vec<Workstation>> = HashMap::new();
        for row in &tables.workstations {
            let Some((site_id, workstation)) = parse_workstation(row) else {
                warn!(
                    table = Table::Workstations.name(),
                    ?row,
                    "skipping malformed cache row"
                );
                continue;
            };
            workstations_by_site
                .entry(site_id)
                .or_default()
                .push(workstation);
        }

        let assets_by_device = build_asset_map(tables);

        Self {
            clients,
            sites_by_client,
            servers_by_site,
            workstations_by_site,
            assets_by_device,
        }
    }
}

impl InventorySource for CacheSource {
    async fn clients(&mut self) -> Result<Vec<Client>, CoreError> {
        Ok(self.clients.clone())
    }

    async fn sites(&mut self, client_id: i64) -> Result<Vec<Site>, CoreError> {
        Ok(self
            .sites_by_client
            .get(&client_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn servers(&mut self, site_id: i64, _client_id: i64) -> Result<Vec<Server>, CoreError> {
        Ok(self
            .servers_by_site
            .get(&site_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn workstations(
        &mut self,
        site_id: i64,
        _client_id: i64,
    ) -> Result<Vec<Workstation>, CoreError> {
        Ok(self
            .workstations_by_site
            .get(&site_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn asset(&mut self, device_id: i64) -> Result<Option<AssetDetails>, CoreError> {
        Ok(self.assets_by_device.get(&device_id).cloned())
    }

    fn checkpoint(&mut self) {}
}

// ── Row parsing ──────────────────────────────────────────────────────
//
// A row is malformed when it is shorter than its table's minimum column
// count or a required numeric field fails to parse. Optional numeric
// fields (ram, hardware type, flags) default to zero instead.

fn field(row: &StringRecord, index: usize) -> String {
    row.get(index).unwrap_or_default().to_owned()
}

fn required_i64(row: &StringRecord, index: usize) -> Option<i64> {
    row.get(index)?.trim().parse().ok()
}

fn lenient_i64(row: &StringRecord, index: usize) -> i64 {
    row.get(index)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_default()
}

fn parse_client(row: &StringRecord) -> Option<Client> {
    if row.len() < Table::Clients.min_columns() {
        return None;
    }
    Some(Client {
        client_id: required_i64(row, 0)?,
        name: field(row, 1),
    })
}

fn parse_site(row: &StringRecord) -> Option<(i64, Site)> {
    if row.len() < Table::Sites.min_columns() {
        return None;
    }
    let site_id = required_i64(row, 0)?;
    let client_id = required_i64(row, 2)?;
    Some((
        client_id,
        Site {
            site_id,
            name: field(row, 1),
        },
    ))
}

fn parse_server(row: &StringRecord) -> Option<(i64, Server)> {
    if row.len() < Table::Servers.min_columns() {
        return None;
    }
    let server_id = required_i64(row, 0)?;
    let online = required_i64(row, 4)?;
    let site_id = required_i64(row, 10)?;
    Some((
        site_id,
        Server {
            server_id,
            name: field(row, 1),
            description: String::new(),
            os: field(row, 2),
            ip: field(row, 3),
            online,
            user: field(row, 5),
            manufacturer: field(row, 6),
            model: field(row, 7),
            device_serial: field(row, 8),
            last_boot_time: field(row, 9),
        },
    ))
}

fn parse_workstation(row: &StringRecord) -> Option<(i64, Workstation)> {
    if row.len() < Table::Workstations.min_columns() {
        return None;
    }
    let workstation_id = required_i64(row, 0)?;
    let online = required_i64(row, 4)?;
    let site_id = required_i64(row, 10)?;
    Some((
        site_id,
        Workstation {
            workstation_id,
            name: field(row, 1),
            description: String::new(),
            os: field(row, 2),
            ip: field(row, 3),
            online,
            user: field(row, 5),
            manufacturer: field(row, 6),
            model: field(row, 7),
            device_serial: field(row, 8),
            last_boot_time: field(row, 9),
        },
    ))
}

fn custom_field(row: &StringRecord, name_index: usize) -> CustomField {
    CustomField {
        name: field(row, name_index),
        value: field(row, name_index + 1),
    }
}

fn parse_asset_summary(row: &StringRecord) -> Option<(i64, AssetDetails)> {
    if row.len() < Table::AssetSummary.min_columns() {
        return None;
    }
    let device_id = required_i64(row, 0)?;
    Some((
        device_id,
        AssetDetails {
            client: field(row, 1),
            chassis_type: field(row, 2),
            ip: field(row, 3),
            mac1: field(row, 4),
            mac2: field(row, 5),
            mac3: field(row, 6),
            user: field(row, 7),
            manufacturer: field(row, 8),
            model: field(row, 9),
            os: field(row, 10),
            serial_number: field(row, 11),
            product_key: field(row, 12),
            role: field(row, 13),
            service_pack: field(row, 14),
            ram: lenient_i64(row, 15),
            scan_time: field(row, 16),
            custom1: custom_field(row, 17),
            custom2: custom_field(row, 19),
            custom3: custom_field(row, 21),
            custom4: custom_field(row, 23),
            custom5: custom_field(row, 25),
            custom6: custom_field(row, 27),
            custom7: custom_field(row, 29),
            custom8: custom_field(row, 31),
            custom9: custom_field(row, 33),
            custom10: custom_field(row, 35),
            hardware: Vec::new(),
            software: Vec::new(),
        },
    ))
}

fn parse_hardware(row: &StringRecord) -> Option<(i64, HardwareItem)> {
    if row.len() < Table::HardwareAssets.min_columns() {
        return None;
    }
    let device_id = required_i64(row, 0)?;
    Some((
        device_id,
        HardwareItem {
            hardware_id: lenient_i64(row, 1),
            name: field(row, 2),
            hardware_type: lenient_i64(row, 3),
            manufacturer: field(row, 4),
            details: field(row, 5),
            status: field(row, 6),
            deleted: lenient_i64(row, 7),
            modified: lenient_i64(row, 8),
        },
    ))
}

fn parse_software(row: &StringRecord) -> Option<(i64, SoftwareItem)> {
    if row.len() < Table::SoftwareAssets.min_columns() {
        return None;
    }
    let device_id = required_i64(row, 0)?;
    Some((
        device_id,
        SoftwareItem {
            software_id: lenient_i64(row, 1),
            name: field(row, 2),
            version: field(row, 3),
            install_date: field(row, 4),
            software_type: field(row, 5),
            deleted: lenient_i64(row, 6),
            modified: lenient_i64(row, 7),
        },
    ))
}

/// Group hardware and software rows by device id and attach them to the
/// matching summary record. Items for a device without a summary row are
/// dropped -- the summary is what makes a bundle exist.
fn build_asset_map(tables: &CacheTables) -> HashMap<i64, AssetDetails> {
    let mut summaries: HashMap<i64, AssetDetails> = HashMap::new();
    for row in tables.asset_summary.iter().flatten() {
        let Some((device_id, details)) = parse_asset_summary(row) else {
            warn!(
                table = Table::AssetSummary.name(),
                ?row,
                "skipping malformed cache row"
            );
            continue;
        };
        summaries.insert(device_id, details);
    }

    let mut hardware_by_device: HashMap<i64, Vec<HardwareItem>> = HashMap::new();
    for row in tables.hardware.iter().flatten() {
        let Some((device_id, item)) = parse_hardware(row) else {
            warn!(
                table = Table::HardwareAssets.name(),
                ?row,
                "skipping malformed cache row"
            );
            continue;
        };
        hardware_by_device.entry(device_id).or_default().push(item);
    }

    let mut software_by_device: HashMap<i64, Vec<SoftwareItem>> = HashMap::new();
    for row in tables.software.iter().flatten() {
        let Some((device_id, item)) = parse_software(row) else {
            warn!(
                table = Table::SoftwareAssets.name(),
                ?row,
                "skipping malformed cache row"
            );
            continue;
        };
        software_by_device.entry(device_id).or_default().push(item);
    }

    for (device_id, details) in &mut summaries {
        if let Some(hardware) = hardware_by_device.remove(device_id) {
            details.hardware = hardware;
        }
        if let Some(software) = software_by_device.remove(device_id) {
            details.software = software;
        }
    }
    summaries
}
