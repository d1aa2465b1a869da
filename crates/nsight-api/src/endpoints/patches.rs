// Patch-management services.

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Patch, PatchList};
use crate::requests::PatchSelection;

impl ApiClient {
    /// List all patches known for a device. (`list_patches`)
    pub async fn list_patches(&self, device_id: i64) -> Result<Vec<Patch>, Error> {
        let list: PatchList = self
            .call_decoded("list_patches", &[("deviceid", device_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// Approve a set of patches on a device. (`approve_patch`)
    pub async fn approve_patches(&self, selection: &PatchSelection) -> Result<(), Error> {
        self.call("approve_patch", &selection.params()).await?;
        Ok(())
    }

    /// Ignore a set of patches on a device. (`ignore_patch`)
    pub async fn ignore_patches(&self, selection: &PatchSelection) -> Result<(), Error> {
        self.call("ignore_patch", &selection.params()).await?;
        Ok(())
    }
}
