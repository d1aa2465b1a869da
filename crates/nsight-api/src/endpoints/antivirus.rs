// Antivirus services: products, definitions, quarantine, scan control.

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{
    AntivirusDefinition, AntivirusDefinitionList, AntivirusProduct, AntivirusProductList,
    QuarantineItem, QuarantineList,
};

impl ApiClient {
    /// List supported antivirus products. (`list_antivirus_products`)
    pub async fn list_antivirus_products(&self) -> Result<Vec<AntivirusProduct>, Error> {
        let list: AntivirusProductList = self.call_decoded("list_antivirus_products", &[]).await?;
        Ok(list.into_vec())
    }

    /// List antivirus definition state for a device. (`list_antivirus_definitions`)
    pub async fn list_antivirus_definitions(
        &self,
        device_id: i64,
    ) -> Result<Vec<AntivirusDefinition>, Error> {
        let list: AntivirusDefinitionList = self
            .call_decoded(
                "list_antivirus_definitions",
                &[("deviceid", device_id.to_string())],
            )
            .await?;
        Ok(list.into_vec())
    }

    /// List quarantined threats on a device. (`list_quarantine`)
    pub async fn list_quarantine(&self, device_id: i64) -> Result<Vec<QuarantineItem>, Error> {
        let list: QuarantineList = self
            .call_decoded("list_quarantine", &[("deviceid", device_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// Start an antivirus scan on a device. (`start_scan`)
    pub async fn start_scan(&self, device_id: i64, scan_type: &str) -> Result<(), Error> {
        self.call(
            "start_scan",
            &[
                ("deviceid", device_id.to_string()),
                ("scantype", scan_type.to_owned()),
            ],
        )
        .await?;
        Ok(())
    }
}
