//! Flat cache store: a durable CSV mirror of one live run.
//!
//! One table per entity kind beneath a fixed directory, each with a
//! mandatory header row. Column order is the on-disk contract and must
//! match historical caches exactly -- see [`Table::header`].

mod reader;
mod writer;

pub use reader::{CacheTables, read_table};
pub use writer::CacheWriter;

/// The seven cache tables, one per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Clients,
    Sites,
    Servers,
    Workstations,
    AssetSummary,
    HardwareAssets,
    SoftwareAssets,
}

impl Table {
    /// Every table, in write order.
    pub const ALL: [Self; 7] = [
        Self::Clients,
        Self::Sites,
        Self::Servers,
        Self::Workstations,
        Self::AssetSummary,
        Self::HardwareAssets,
        Self::SoftwareAssets,
    ];

    /// Stable table name (also the file stem).
    pub fn name(self) -> &'static str {
        match self {
            Self::Clients => "clients",
            Self::Sites => "sites",
            Self::Servers => "servers",
            Self::Workstations => "workstations",
            Self::AssetSummary => "asset_summary",
            Self::HardwareAssets => "hardware_assets",
            Self::SoftwareAssets => "software_assets",
        }
    }

    /// File name beneath the cache directory.
    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// Fixed header row. Column order is load-bearing: readers address
    /// fields by index and historical caches must keep loading.
    pub fn header(self) -> &'static [&'static str] {
        match self {
            Self::Clients => &["client_id", "name"],
            Self::Sites => &["site_id", "name", "client_id"],
            Self::Servers => &[
                "server_id",
                "name",
                "os",
                "ip",
                "online",
                "user",
                "manufacturer",
                "model",
                "serial_number",
                "last_boot_time",
                "site_id",
                "client_id",
            ],
            Self::Workstations => &[
                "workstation_id",
                "name",
                "os",
                "ip",
                "online",
                "user",
                "manufacturer",
                "model",
                "serial_number",
                "last_boot_time",
                "site_id",
                "client_id",
            ],
            Self::AssetSummary => &[
                "device_id",
                "client_name",
                "chassistype",
                "ip_asset",
                "mac1",
                "mac2",
                "mac3",
                "user_asset",
                "manufacturer_asset",
                "model_asset",
                "os_asset",
                "serialnumber_asset",
                "productkey",
                "role",
                "servicepack",
                "ram",
                "scantime",
                "custom1_name",
                "custom1_value",
                "custom2_name",
                "custom2_value",
                "custom3_name",
                "custom3_value",
                "custom4_name",
                "custom4_value",
                "custom5_name",
                "custom5_value",
                "custom6_name",
                "custom6_value",
                "custom7_name",
                "custom7_value",
                "custom8_name",
                "custom8_value",
                "custom9_name",
                "custom9_value",
                "custom10_name",
                "custom10_value",
            ],
            Self::HardwareAssets => &[
                "device_id",
                "hardware_id",
                "name",
                "type",
                "manufacturer",
                "details",
                "status",
                "deleted",
                "modified",
            ],
            Self::SoftwareAssets => &[
                "device_id",
                "software_id",
                "name",
                "version",
                "install_date",
                "type",
                "deleted",
                "modified",
            ],
        }
    }

    /// Minimum data-row field count; shorter rows are malformed and
    /// skipped by the reader side.
    pub fn min_columns(self) -> usize {
        match self {
            Self::Clients => 2,
            Self::Sites => 3,
            Self::Servers | Self::Workstations => 12,
            Self::AssetSummary => 37,
            Self::HardwareAssets => 9,
            Self::SoftwareAssets => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_match_min_columns() {
        for table in Table::ALL {
            assert_eq!(
                table.header().len(),
                table.min_columns(),
                "header/min mismatch for {}",
                table.name()
            );
        }
    }
}
