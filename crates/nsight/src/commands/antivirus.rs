//! Antivirus command handlers.

use nsight_api::ApiClient;

use crate::error::CliError;
use crate::output;

pub async fn products(api: &ApiClient) -> Result<(), CliError> {
    let products = api.list_antivirus_products().await?;
    output::print_json(&products)
}

pub async fn definitions(api: &ApiClient, device_id: i64) -> Result<(), CliError> {
    let definitions = api.list_antivirus_definitions(device_id).await?;
    output::print_json(&definitions)
}

pub async fn quarantine(api: &ApiClient, device_id: i64) -> Result<(), CliError> {
    let items = api.list_quarantine(device_id).await?;
    output::print_json(&items)
}

pub async fn start_scan(api: &ApiClient, device_id: i64, scan_type: &str) -> Result<(), CliError> {
    api.start_scan(device_id, scan_type).await?;
    output::print_success("Antivirus scan started")
}
