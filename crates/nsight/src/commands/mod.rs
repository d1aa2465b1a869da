//! Command handlers, grouped by dashboard feature area.
//!
//! `dispatch` is the flat service table: every subcommand routes to
//! exactly one handler, and every handler makes exactly one API call
//! (plus name resolution where a service accepts names).

mod admin;
mod antivirus;
mod assets;
mod checks;
mod export;
mod history;
mod inventory;
mod patches;
pub mod util;

use std::time::Duration;

use nsight_api::{ApiClient, TransportConfig};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Build an `ApiClient` from the resolved credentials and CLI overrides.
pub fn build_api_client(global: &GlobalOpts) -> Result<ApiClient, CliError> {
    let credentials = nsight_config::resolve_credentials(global.profile.as_deref())?;
    let timeout = global.timeout.unwrap_or(credentials.timeout_secs);
    let transport = TransportConfig {
        timeout: Duration::from_secs(timeout),
    };
    Ok(ApiClient::new(
        &credentials.server,
        credentials.api_key,
        &transport,
    )?)
}

pub async fn dispatch(command: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match command {
        // The exporter owns its own client lifecycle (cache mode needs
        // no credentials at all).
        Command::Export(args) => export::handle(args, global).await,

        // ── Basic entity listing ──
        Command::ListClients => inventory::list_clients(&build_api_client(global)?).await,
        Command::ListSites { client } => {
            inventory::list_sites(&build_api_client(global)?, &client).await
        }
        Command::ListServers { site } => {
            inventory::list_servers(&build_api_client(global)?, &site).await
        }
        Command::ListWorkstations { site } => {
            inventory::list_workstations(&build_api_client(global)?, &site).await
        }
        Command::ListDevices { site_id } => {
            inventory::list_devices(&build_api_client(global)?, site_id).await
        }
        Command::ListDevicesAtClient { client_id } => {
            inventory::list_devices_at_client(&build_api_client(global)?, client_id).await
        }
        Command::ListAgentlessAssets { site_id } => {
            inventory::list_agentless_assets(&build_api_client(global)?, site_id).await
        }

        // ── Checks and monitoring ──
        Command::ListFailingChecks => checks::list_failing(&build_api_client(global)?).await,
        Command::ListChecks { id } => checks::list(&build_api_client(global)?, id).await,
        Command::ListDeviceMonitoringDetails { device_id } => {
            checks::monitoring_details(&build_api_client(global)?, device_id).await
        }
        Command::ListCheckConfiguration { device_id, os } => {
            checks::configuration(&build_api_client(global)?, device_id, os.as_deref()).await
        }
        Command::ListCheckConfigurationWindows { device_id } => {
            checks::configuration(&build_api_client(global)?, device_id, Some("windows")).await
        }
        Command::ListCheckConfigurationMac { device_id } => {
            checks::configuration(&build_api_client(global)?, device_id, Some("mac")).await
        }
        Command::ListCheckConfigurationLinux { device_id } => {
            checks::configuration(&build_api_client(global)?, device_id, Some("linux")).await
        }
        Command::ListOutages {
            site_id,
            start_date,
            end_date,
        } => checks::outages(&build_api_client(global)?, site_id, start_date, end_date).await,
        Command::ClearCheck { check_id } => {
            checks::clear(&build_api_client(global)?, check_id).await
        }
        Command::AddCheckNote { check_id, note } => {
            checks::add_note(&build_api_client(global)?, check_id, &note).await
        }

        // ── Asset tracking ──
        Command::ListHardware { device_id } => {
            assets::hardware(&build_api_client(global)?, device_id).await
        }
        Command::ListSoftware { device_id } => {
            assets::software(&build_api_client(global)?, device_id).await
        }
        Command::ListDeviceAssetDetails { device_id } => {
            assets::details(&build_api_client(global)?, device_id).await
        }
        Command::ListLicenseGroups => assets::license_groups(&build_api_client(global)?).await,

        // ── Patch management ──
        Command::ListPatches { device_id } => {
            patches::list(&build_api_client(global)?, device_id).await
        }
        Command::ApprovePatch {
            device_id,
            patch_ids,
        } => patches::approve(&build_api_client(global)?, device_id, &patch_ids).await,
        Command::IgnorePatch {
            device_id,
            patch_ids,
        } => patches::ignore(&build_api_client(global)?, device_id, &patch_ids).await,

        // ── Antivirus ──
        Command::ListAntivirusProducts => antivirus::products(&build_api_client(global)?).await,
        Command::ListAntivirusDefinitions { device_id } => {
            antivirus::definitions(&build_api_client(global)?, device_id).await
        }
        Command::ListQuarantine { device_id } => {
            antivirus::quarantine(&build_api_client(global)?, device_id).await
        }
        Command::StartScan {
            device_id,
            scan_type,
        } => antivirus::start_scan(&build_api_client(global)?, device_id, &scan_type).await,

        // ── Performance history ──
        Command::ListPerformanceHistory {
            device_id,
            check_id,
            start_date,
            end_date,
        } => {
            history::performance(
                &build_api_client(global)?,
                device_id,
                check_id,
                start_date,
                end_date,
            )
            .await
        }
        Command::ListDriveSpaceHistory {
            device_id,
            start_date,
            end_date,
        } => {
            history::drive_space(&build_api_client(global)?, device_id, start_date, end_date).await
        }

        // ── Templates / backup / settings / users ──
        Command::ListTemplates => admin::templates(&build_api_client(global)?).await,
        Command::ListBackupSessions { device_id } => {
            admin::backup_sessions(&build_api_client(global)?, device_id).await
        }
        Command::ListWallChartSettings => {
            admin::wall_chart_settings(&build_api_client(global)?).await
        }
        Command::ListGeneralSettings => admin::general_settings(&build_api_client(global)?).await,
        Command::ListActiveDirectoryUsers { device_id } => {
            admin::active_directory_users(&build_api_client(global)?, device_id).await
        }
        Command::RunTaskNow { task_id } => {
            admin::run_task_now(&build_api_client(global)?, task_id).await
        }

        // ── Site management ──
        Command::AddClient {
            name,
            contact_name,
            contact_email,
        } => admin::add_client(&build_api_client(global)?, name, contact_name, contact_email).await,
        Command::AddSite {
            client_id,
            name,
            contact_name,
            contact_email,
        } => {
            admin::add_site(
                &build_api_client(global)?,
                client_id,
                name,
                contact_name,
                contact_email,
            )
            .await
        }
        Command::GetSiteInstallationPackage {
            site_id,
            package_type,
        } => admin::installation_package(&build_api_client(global)?, site_id, &package_type).await,
    }
}
