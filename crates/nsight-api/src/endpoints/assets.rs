// Asset-tracking services: per-device hardware/software inventories, the
// combined asset-details bundle, and license groups.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{
    AssetDetails, HardwareItem, HardwareList, LicenseGroup, LicenseGroupList, SoftwareItem,
    SoftwareList,
};

impl ApiClient {
    /// Fetch the full asset bundle for one device. (`list_device_asset_details`)
    ///
    /// The service answers with an empty document for devices that have
    /// never completed an asset scan; that decodes to an all-default
    /// bundle, which callers treat as "no data".
    pub async fn device_asset_details(&self, device_id: i64) -> Result<AssetDetails, Error> {
        debug!(device_id, "fetching asset details");
        self.call_decoded(
            "list_device_asset_details",
            &[("deviceid", device_id.to_string())],
        )
        .await
    }

    /// List tracked hardware for a device. (`list_hardware`)
    pub async fn list_hardware(&self, device_id: i64) -> Result<Vec<HardwareItem>, Error> {
        let list: HardwareList = self
            .call_decoded("list_hardware", &[("deviceid", device_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// List tracked software for a device. (`list_software`)
    pub async fn list_software(&self, device_id: i64) -> Result<Vec<SoftwareItem>, Error> {
        let list: SoftwareList = self
            .call_decoded("list_software", &[("deviceid", device_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// List software license groups. (`list_license_groups`)
    pub async fn list_license_groups(&self) -> Result<Vec<LicenseGroup>, Error> {
        let list: LicenseGroupList = self.call_decoded("list_license_groups", &[]).await?;
        Ok(list.into_vec())
    }
}
