//! Asset-tracking command handlers.

use nsight_api::ApiClient;

use crate::error::CliError;
use crate::output;

pub async fn hardware(api: &ApiClient, device_id: i64) -> Result<(), CliError> {
    let items = api.list_hardware(device_id).await?;
    output::print_json(&items)
}

pub async fn software(api: &ApiClient, device_id: i64) -> Result<(), CliError> {
    let items = api.list_software(device_id).await?;
    output::print_json(&items)
}

pub async fn details(api: &ApiClient, device_id: i64) -> Result<(), CliError> {
    let details = api.device_asset_details(device_id).await?;
    output::print_json(&details)
}

pub async fn license_groups(api: &ApiClient) -> Result<(), CliError> {
    let groups = api.list_license_groups().await?;
    output::print_json(&groups)
}
