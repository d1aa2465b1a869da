// Check and monitoring services: listing, configuration, outages, and
// the two check mutations (clear, annotate).

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Check, CheckList};
use crate::requests::OutagesQuery;

impl ApiClient {
    /// List every currently failing check. (`list_failing_checks`)
    pub async fn list_failing_checks(&self) -> Result<Vec<Check>, Error> {
        let list: CheckList = self.call_decoded("list_failing_checks", &[]).await?;
        Ok(list.into_vec())
    }

    /// List the checks configured on a device. (`list_checks`)
    pub async fn list_checks(&self, device_id: i64) -> Result<Vec<Check>, Error> {
        let list: CheckList = self
            .call_decoded("list_checks", &[("deviceid", device_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// List the checks across a whole site. (`list_checks` with `siteid`)
    pub async fn list_checks_by_site(&self, site_id: i64) -> Result<Vec<Check>, Error> {
        let list: CheckList = self
            .call_decoded("list_checks", &[("siteid", site_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// List monitoring detail rows for a device. (`list_device_monitoring_details`)
    pub async fn list_device_monitoring_details(
        &self,
        device_id: i64,
    ) -> Result<Vec<Check>, Error> {
        let list: CheckList = self
            .call_decoded(
                "list_device_monitoring_details",
                &[("deviceid", device_id.to_string())],
            )
            .await?;
        Ok(list.into_vec())
    }

    /// Fetch the check configuration for a device.
    ///
    /// With an OS hint the service name becomes
    /// `list_check_configuration_{os}`; without one, the plain service.
    pub async fn list_check_configuration(
        &self,
        device_id: i64,
        os: Option<&str>,
    ) -> Result<Vec<Check>, Error> {
        let service = match os {
            Some("windows") => "list_check_configuration_windows",
            Some("mac") => "list_check_configuration_mac",
            Some("linux") => "list_check_configuration_linux",
            _ => "list_check_configuration",
        };
        let list: CheckList = self
            .call_decoded(service, &[("deviceid", device_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// List outage periods for a site within a date range. (`list_outages`)
    pub async fn list_outages(&self, query: &OutagesQuery) -> Result<Vec<Check>, Error> {
        let list: CheckList = self.call_decoded("list_outages", &query.params()).await?;
        Ok(list.into_vec())
    }

    /// Clear a failed check. (`clear_check`)
    pub async fn clear_check(&self, check_id: i64) -> Result<(), Error> {
        self.call("clear_check", &[("checkid", check_id.to_string())])
            .await?;
        Ok(())
    }

    /// Attach a note to a check. (`add_check_note`)
    pub async fn add_check_note(&self, check_id: i64, note: &str) -> Result<(), Error> {
        self.call(
            "add_check_note",
            &[("checkid", check_id.to_string()), ("note", note.to_owned())],
        )
        .await?;
        Ok(())
    }
}
