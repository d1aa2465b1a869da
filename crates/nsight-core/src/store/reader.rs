// Cache table readers.
//
// Reading is string-level: rows come back as ordered field tuples with
// the header stripped, and all typing/validation happens in the cache
// source (where malformed rows are skipped, not fatal). A missing file
// is a distinct condition so callers can decide between "fatal" (base
// tables) and "degrade" (asset tables).

use std::fs::File;
use std::io;
use std::path::Path;

use csv::StringRecord;
use tracing::warn;

use crate::error::CoreError;
use crate::store::Table;

/// Read all data rows of one table, header stripped, in file order.
///
/// An empty (zero-data-row) file is a valid empty result. Rows with
/// unexpected field counts are returned as-is -- the caller applies the
/// malformed-row policy.
pub fn read_table(dir: &Path, table: Table) -> Result<Vec<StringRecord>, CoreError> {
    let path = dir.join(table.file_name());
    let file = match File::open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CoreError::CacheTableMissing {
                table: table.name(),
                path,
            });
        }
        Err(e) => {
            return Err(CoreError::CacheIo {
                path,
                source: e,
            });
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| CoreError::CacheRead {
            table: table.name(),
            source: e,
        })?;
        rows.push(record);
    }
    Ok(rows)
}

/// All seven tables loaded from disk. Base tables are mandatory; asset
/// tables degrade to `None` when absent.
pub struct CacheTables {
    pub clients: Vec<StringRecord>,
    pub sites: Vec<StringRecord>,
    pub servers: Vec<StringRecord>,
    pub workstations: Vec<StringRecord>,
    pub asset_summary: Option<Vec<StringRecord>>,
    pub hardware: Option<Vec<StringRecord>>,
    pub software: Option<Vec<StringRecord>>,
}

impl CacheTables {
    /// Load every table beneath `dir`.
    ///
    /// A missing base table is fatal. A missing asset table only costs
    /// the asset details it would have supplied.
    pub fn load(dir: &Path) -> Result<Self, CoreError> {
        Ok(Self {
            clients: read_table(dir, Table::Clients)?,
            sites: read_table(dir, Table::Sites)?,
            servers: read_table(dir, Table::Servers)?,
            workstations: read_table(dir, Table::Workstations)?,
            asset_summary: read_optional(dir, Table::AssetSummary)?,
            hardware: read_optional(dir, Table::HardwareAssets)?,
            software: read_optional(dir, Table::SoftwareAssets)?,
        })
    }
}

fn read_optional(dir: &Path, table: Table) -> Result<Option<Vec<StringRecord>>, CoreError> {
    match read_table(dir, table) {
        Ok(rows) => Ok(Some(rows)),
        Err(CoreError::CacheTableMissing { table, .. }) => {
            warn!(table, "cache table not found, asset details will be missing");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CacheWriter;

    #[test]
    fn missing_table_is_distinct_condition() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = read_table(dir.path(), Table::Clients);
        assert!(matches!(
            result,
            Err(CoreError::CacheTableMissing { table: "clients", .. })
        ));
    }

    #[test]
    fn header_only_file_is_empty_result() {
        let dir = tempfile::tempdir().expect("tempdir");
        let writer = CacheWriter::open(dir.path()).expect("open cache");
        writer.finish();

        let rows = read_table(dir.path(), Table::Servers).expect("read servers");
        assert!(rows.is_empty());
    }

    #[test]
    fn rows_come_back_in_write_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut writer = CacheWriter::open(dir.path()).expect("open cache");
        for (id, name) in [(3, "c"), (1, "a"), (2, "b")] {
            writer.append_client(&nsight_api::models::Client {
                client_id: id,
                name: name.into(),
            });
        }
        writer.finish();

        let rows = read_table(dir.path(), Table::Clients).expect("read clients");
        let ids: Vec<&str> = rows.iter().filter_map(|r| r.get(0)).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn open_truncates_previous_run() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut writer = CacheWriter::open(dir.path()).expect("open cache");
        writer.append_client(&nsight_api::models::Client {
            client_id: 1,
            name: "old".into(),
        });
        writer.finish();

        let writer = CacheWriter::open(dir.path()).expect("reopen cache");
        writer.finish();

        let rows = read_table(dir.path(), Table::Clients).expect("read clients");
        assert!(rows.is_empty(), "reopen must fully replace prior contents");
    }
}
