//! Patch-management command handlers.

use nsight_api::ApiClient;
use nsight_api::requests::PatchSelection;

use crate::error::CliError;
use crate::output;

use super::util;

pub async fn list(api: &ApiClient, device_id: i64) -> Result<(), CliError> {
    let patches = api.list_patches(device_id).await?;
    output::print_json(&patches)
}

pub async fn approve(api: &ApiClient, device_id: i64, patch_ids: &str) -> Result<(), CliError> {
    let patch_ids = util::parse_id_list("patch_ids", patch_ids)?;
    api.approve_patches(&PatchSelection {
        device_id,
        patch_ids,
    })
    .await?;
    output::print_success("Patches approved")
}

pub async fn ignore(api: &ApiClient, device_id: i64, patch_ids: &str) -> Result<(), CliError> {
    let patch_ids = util::parse_id_list("patch_ids", patch_ids)?;
    api.ignore_patches(&PatchSelection {
        device_id,
        patch_ids,
    })
    .await?;
    output::print_success("Patches ignored")
}
