//! Bulk exporter command handler.

use nsight_core::{ExportMode, ExportOptions, run_export};
use tracing::info;

use crate::cli::{ExportArgs, GlobalOpts};
use crate::error::CliError;

pub async fn handle(args: ExportArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mode = if args.cache {
        info!("building export from CSV cache");
        ExportMode::Cache
    } else {
        info!("starting live export from API");
        ExportMode::Live(super::build_api_client(global)?)
    };

    let options = ExportOptions {
        data_dir: args.data_dir,
        output: args.output,
    };

    run_export(mode, &options).await?;
    Ok(())
}
