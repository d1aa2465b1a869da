// Performance and drive-space history services.

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{PerformanceData, PerformanceDataList};
use crate::requests::{DriveSpaceHistoryQuery, PerformanceHistoryQuery};

impl ApiClient {
    /// Fetch performance samples for one check. (`list_performance_history`)
    pub async fn list_performance_history(
        &self,
        query: &PerformanceHistoryQuery,
    ) -> Result<Vec<PerformanceData>, Error> {
        let list: PerformanceDataList = self
            .call_decoded("list_performance_history", &query.params())
            .await?;
        Ok(list.into_vec())
    }

    /// Fetch drive-space samples for a device. (`list_drive_space_history`)
    pub async fn list_drive_space_history(
        &self,
        query: &DriveSpaceHistoryQuery,
    ) -> Result<Vec<PerformanceData>, Error> {
        let list: PerformanceDataList = self
            .call_decoded("list_drive_space_history", &query.params())
            .await?;
        Ok(list.into_vec())
    }
}
