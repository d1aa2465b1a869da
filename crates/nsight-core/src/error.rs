use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the `nsight-core` crate.
///
/// Only unrecoverable conditions surface here: record-level and
/// per-subtree failures are absorbed by the assembler and logged per its
/// partial-failure policy.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A remote call failed at a point where the walk cannot continue
    /// (the top-level client listing).
    #[error(transparent)]
    Api(#[from] nsight_api::Error),

    /// A mandatory cache table file does not exist.
    #[error("cache table '{table}' not found at {} -- run a live export first", path.display())]
    CacheTableMissing { table: &'static str, path: PathBuf },

    /// Reading rows from a cache table failed mid-file.
    #[error("failed to read cache table '{table}': {source}")]
    CacheRead {
        table: &'static str,
        source: csv::Error,
    },

    /// Writing a row or header to a cache table failed.
    #[error("failed to write cache table '{table}': {source}")]
    CacheWrite {
        table: &'static str,
        source: csv::Error,
    },

    /// Creating or opening a cache file or directory failed.
    #[error("cache I/O error at {}: {source}", path.display())]
    CacheIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The final tree could not be serialized.
    #[error("failed to serialize export tree: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output document could not be written.
    #[error("failed to write output to {target}: {source}")]
    Output {
        target: String,
        source: std::io::Error,
    },
}
