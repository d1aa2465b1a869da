//! Performance-history command handlers.

use nsight_api::ApiClient;
use nsight_api::requests::{DriveSpaceHistoryQuery, PerformanceHistoryQuery};

use crate::error::CliError;
use crate::output;

pub async fn performance(
    api: &ApiClient,
    device_id: i64,
    check_id: i64,
    start_date: String,
    end_date: String,
) -> Result<(), CliError> {
    let samples = api
        .list_performance_history(&PerformanceHistoryQuery {
            device_id,
            check_id,
            start_date,
            end_date,
        })
        .await?;
    output::print_json(&samples)
}

pub async fn drive_space(
    api: &ApiClient,
    device_id: i64,
    start_date: String,
    end_date: String,
) -> Result<(), CliError> {
    let samples = api
        .list_drive_space_history(&DriveSpaceHistoryQuery {
            device_id,
            start_date,
            end_date,
        })
        .await?;
    output::print_json(&samples)
}
