//! Templates, backup, settings, users, tasks, and site management.

use nsight_api::ApiClient;
use nsight_api::requests::{AddClientRequest, AddSiteRequest, InstallationPackageRequest};

use crate::error::CliError;
use crate::output;

pub async fn templates(api: &ApiClient) -> Result<(), CliError> {
    let templates = api.list_templates().await?;
    output::print_json(&templates)
}

pub async fn backup_sessions(api: &ApiClient, device_id: i64) -> Result<(), CliError> {
    let sessions = api.list_backup_sessions(device_id).await?;
    output::print_json(&sessions)
}

pub async fn wall_chart_settings(api: &ApiClient) -> Result<(), CliError> {
    let settings = api.list_wall_chart_settings().await?;
    output::print_json(&settings)
}

pub async fn general_settings(api: &ApiClient) -> Result<(), CliError> {
    let settings = api.list_general_settings().await?;
    output::print_json(&settings)
}

pub async fn active_directory_users(api: &ApiClient, device_id: i64) -> Result<(), CliError> {
    let users = api.list_active_directory_users(device_id).await?;
    output::print_json(&users)
}

pub async fn run_task_now(api: &ApiClient, task_id: i64) -> Result<(), CliError> {
    api.run_task_now(task_id).await?;
    output::print_success("Task started")
}

pub async fn add_client(
    api: &ApiClient,
    name: String,
    contact_name: String,
    contact_email: String,
) -> Result<(), CliError> {
    api.add_client(&AddClientRequest {
        name,
        contact_name,
        contact_email,
    })
    .await?;
    output::print_success("Client added")
}

pub async fn add_site(
    api: &ApiClient,
    client_id: i64,
    name: String,
    contact_name: String,
    contact_email: String,
) -> Result<(), CliError> {
    api.add_site(&AddSiteRequest {
        client_id,
        name,
        contact_name,
        contact_email,
    })
    .await?;
    output::print_success("Site added")
}

pub async fn installation_package(
    api: &ApiClient,
    site_id: i64,
    package_type: &str,
) -> Result<(), CliError> {
    let package = api
        .site_installation_package(&InstallationPackageRequest {
            site_id,
            package_type: package_type.to_owned(),
        })
        .await?;
    output::print_json(&serde_json::json!({
        "status": "success",
        "package_size": package.len(),
    }))
}
