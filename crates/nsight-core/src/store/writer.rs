// Cache table writers.
//
// A live export opens all seven tables before the first fetch and streams
// one row per fetched entity, so a killed run still leaves a usable
// partial cache. Opening truncates: every run fully replaces the prior
// tables. Row-level write failures are logged and absorbed -- they never
// abort the walk -- while setup failures are fatal to the caller.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use nsight_api::models::{AssetDetails, Client, Server, Site, Workstation};

use crate::error::CoreError;
use crate::store::Table;

struct TableWriter {
    table: Table,
    writer: csv::Writer<File>,
}

impl TableWriter {
    fn open(dir: &Path, table: Table) -> Result<Self, CoreError> {
        let path = dir.join(table.file_name());
        let file = File::create(&path).map_err(|e| CoreError::CacheIo {
            path: path.clone(),
            source: e,
        })?;
        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record(table.header())
            .and_then(|()| writer.flush().map_err(Into::into))
            .map_err(|e| CoreError::CacheWrite {
                table: table.name(),
                source: e,
            })?;
        debug!(table = table.name(), path = %path.display(), "opened cache table");
        Ok(Self { table, writer })
    }

    fn append<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        if let Err(e) = self.writer.write_record(row) {
            warn!(table = self.table.name(), error = %e, "failed to write cache row");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.writer.flush() {
            warn!(table = self.table.name(), error = %e, "failed to flush cache table");
        }
    }
}

/// Exclusive writers for all seven cache tables, owned by the export
/// driver for the duration of one live run.
///
/// Flushing also happens on drop (the underlying `csv::Writer` flushes
/// its buffer when dropped), so early-exit paths still leave the tables
/// in a readable state.
pub struct CacheWriter {
    dir: PathBuf,
    clients: TableWriter,
    sites: TableWriter,
    servers: TableWriter,
    workstations: TableWriter,
    asset_summary: TableWriter,
    hardware: TableWriter,
    software: TableWriter,
}

impl CacheWriter {
    /// Open (and truncate) every table beneath `dir`, writing headers.
    pub fn open(dir: &Path) -> Result<Self, CoreError> {
        std::fs::create_dir_all(dir).map_err(|e| CoreError::CacheIo {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            dir: dir.to_path_buf(),
            clients: TableWriter::open(dir, Table::Clients)?,
            sites: TableWriter::open(dir, Table::Sites)?,
            servers: TableWriter::open(dir, Table::Servers)?,
            workstations: TableWriter::open(dir, Table::Workstations)?,
            asset_summary: TableWriter::open(dir, Table::AssetSummary)?,
            hardware: TableWriter::open(dir, Table::HardwareAssets)?,
            software: TableWriter::open(dir, Table::SoftwareAssets)?,
        })
    }

    /// The directory the tables live in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn append_client(&mut self, client: &Client) {
        self.clients
            .append([client.client_id.to_string(), client.name.clone()]);
    }

    pub fn append_site(&mut self, site: &Site, client_id: i64) {
        self.sites.append([
            site.site_id.to_string(),
            site.name.clone(),
            client_id.to_string(),
        ]);
    }

    /// Append a server row. Boot time is stored raw (epoch seconds);
    /// formatting is an assembly-time concern.
    pub fn append_server(&mut self, server: &Server, site_id: i64, client_id: i64) {
        self.servers.append([
            server.server_id.to_string(),
            server.name.clone(),
            server.os.clone(),
            server.ip.clone(),
            server.online.to_string(),
            server.user.clone(),
            server.manufacturer.clone(),
            server.model.clone(),
            server.device_serial.clone(),
            server.last_boot_time.clone(),
            site_id.to_string(),
            client_id.to_string(),
        ]);
    }

    /// Append a workstation row. Same layout as servers.
    pub fn append_workstation(
        &mut self,
        workstation: &Workstation,
        site_id: i64,
        client_id: i64,
    ) {
        self.workstations.append([
            workstation.workstation_id.to_string(),
            workstation.name.clone(),
            workstation.os.clone(),
            workstation.ip.clone(),
            workstation.online.to_string(),
            workstation.user.clone(),
            workstation.manufacturer.clone(),
            workstation.model.clone(),
            workstation.device_serial.clone(),
            workstation.last_boot_time.clone(),
            site_id.to_string(),
            client_id.to_string(),
        ]);
    }

    /// Append an asset bundle: one summary row plus one row per hardware
    /// and software item, all keyed by the owning device id.
    pub fn append_asset(&mut self, device_id: i64, details: &AssetDetails) {
        let id = device_id.to_string();
        self.asset_summary.append([
            id.clone(),
            details.client.clone(),
            details.chassis_type.clone(),
            details.ip.clone(),
            details.mac1.clone(),
            details.mac2.clone(),
            details.mac3.clone(),
            details.user.clone(),
            details.manufacturer.clone(),
            details.model.clone(),
            details.os.clone(),
            details.serial_number.clone(),
            details.product_key.clone(),
            details.role.clone(),
            details.service_pack.clone(),
            details.ram.to_string(),
            details.scan_time.clone(),
            details.custom1.name.clone(),
            details.custom1.value.clone(),
            details.custom2.name.clone(),
            details.custom2.value.clone(),
            details.custom3.name.clone(),
            details.custom3.value.clone(),
            details.custom4.name.clone(),
            details.custom4.value.clone(),
            details.custom5.name.clone(),
            details.custom5.value.clone(),
            details.custom6.name.clone(),
            details.custom6.value.clone(),
            details.custom7.name.clone(),
            details.custom7.value.clone(),
            details.custom8.name.clone(),
            details.custom8.value.clone(),
            details.custom9.name.clone(),
            details.custom9.value.clone(),
            details.custom10.name.clone(),
            details.custom10.value.clone(),
        ]);

        for item in &details.hardware {
            self.hardware.append([
                id.clone(),
                item.hardware_id.to_string(),
                item.name.clone(),
                item.hardware_type.to_string(),
                item.manufacturer.clone(),
                item.details.clone(),
                item.status.clone(),
                item.deleted.to_string(),
                item.modified.to_string(),
            ]);
        }
        for item in &details.software {
            self.software.append([
                id.clone(),
                item.software_id.to_string(),
                item.name.clone(),
                item.version.clone(),
                item.install_date.clone(),
                item.software_type.clone(),
                item.deleted.to_string(),
                item.modified.to_string(),
            ]);
        }
    }

    /// Flush the four base tables. Called after each client subtree so a
    /// killed run loses at most the client in flight.
    pub fn checkpoint(&mut self) {
        self.clients.flush();
        self.sites.flush();
        self.servers.flush();
        self.workstations.flush();
    }

    /// Flush every table. Consumes the writer; files close on drop.
    pub fn finish(mut self) {
        debug!("flushing and closing cache tables");
        self.clients.flush();
        self.sites.flush();
        self.servers.flush();
        self.workstations.flush();
        self.asset_summary.flush();
        self.hardware.flush();
        self.software.flush();
    }
}
