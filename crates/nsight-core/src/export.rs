//! Export driver: top-level orchestration for the bulk exporter.
//!
//! Picks the source mode, runs the assembler, and writes the final JSON
//! document. In live mode the cache writers are opened before the first
//! fetch and flushed/closed on every exit path; per-record failures are
//! handled below this layer and never reach it.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use nsight_api::ApiClient;

use crate::assemble::assemble;
use crate::error::CoreError;
use crate::source::{CacheSource, LiveSource};
use crate::store::CacheWriter;
use crate::tree::ClientNode;

/// Where the records come from.
pub enum ExportMode {
    /// Walk the remote API, mirroring everything into the cache tables.
    Live(ApiClient),
    /// Rebuild the tree from a previously written cache.
    Cache,
}

/// Driver options.
pub struct ExportOptions {
    /// Directory holding the cache tables.
    pub data_dir: PathBuf,
    /// Output file; `None` writes to stdout.
    pub output: Option<PathBuf>,
}

/// Run one export end to end and write the JSON document.
pub async fn run_export(mode: ExportMode, options: &ExportOptions) -> Result<(), CoreError> {
    let forest = match mode {
        ExportMode::Live(api) => {
            let cache = CacheWriter::open(&options.data_dir)?;
            let mut source = LiveSource::new(api, cache);
            let forest = assemble(&mut source).await?;
            source.finish();
            forest
        }
        ExportMode::Cache => {
            let mut source = CacheSource::load(&options.data_dir)?;
            assemble(&mut source).await?
        }
    };

    write_document(&forest, options)
}

fn write_document(forest: &[ClientNode], options: &ExportOptions) -> Result<(), CoreError> {
    let json = serde_json::to_string_pretty(forest)?;

    match &options.output {
        Some(path) => {
            info!(path = %path.display(), "writing export document");
            std::fs::write(path, json.as_bytes()).map_err(|e| CoreError::Output {
                target: path.display().to_string(),
                source: e,
            })?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(|e| CoreError::Output {
                target: "stdout".into(),
                source: e,
            })?;
        }
    }
    Ok(())
}
