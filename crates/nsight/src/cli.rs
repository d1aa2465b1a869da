//! Clap derive structures for the `nsight` CLI.
//!
//! The subcommand names are the wire service names verbatim
//! (`list_clients`, `add_check_note`, ...), so the first positional
//! argument selects the service and the remaining positional arguments
//! are that service's fixed parameters. `export` is the one addition:
//! the bulk hierarchy exporter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// nsight -- data-access CLI for the N-able N-sight dashboard
#[derive(Debug, Parser)]
#[command(
    name = "nsight",
    version,
    about = "Query the N-sight RMM dashboard from the command line",
    long_about = "A CLI for the N-sight data-extraction API.\n\n\
        Each service subcommand maps onto exactly one API call and prints\n\
        the decoded result as JSON. `export` walks the full client/site/\n\
        device hierarchy and also maintains the local CSV cache.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Dashboard profile to use
    #[arg(long, short = 'p', env = "NSIGHT_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "NSIGHT_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

// ── Export arguments ─────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Read from the CSV cache instead of fetching from the API
    #[arg(long)]
    pub cache: bool,

    /// Directory holding the cache tables
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Output file (stdout when omitted)
    pub output: Option<PathBuf>,
}

// ── Service commands ─────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
#[command(rename_all = "snake_case")]
pub enum Command {
    /// Export the nested client/site/device hierarchy as JSON
    Export(ExportArgs),

    // ── Basic entity listing ──
    /// List all clients
    ListClients,
    /// List sites for a client (id or exact name)
    ListSites { client: String },
    /// List servers at a site (id or exact name)
    ListServers { site: String },
    /// List workstations at a site (id or exact name)
    ListWorkstations { site: String },
    /// List devices at a site
    ListDevices { site_id: i64 },
    /// List devices across a client
    ListDevicesAtClient { client_id: i64 },
    /// List agentless assets at a site
    ListAgentlessAssets { site_id: i64 },

    // ── Checks and monitoring ──
    /// List all failing checks
    ListFailingChecks,
    /// List checks for a device (falls back to site checks)
    ListChecks { id: i64 },
    /// List monitoring details for a device
    ListDeviceMonitoringDetails { device_id: i64 },
    /// Fetch check configuration for a device
    ListCheckConfiguration {
        device_id: i64,
        /// Optional OS selector: windows, mac, or linux
        os: Option<String>,
    },
    /// Fetch Windows check configuration for a device
    ListCheckConfigurationWindows { device_id: i64 },
    /// Fetch macOS check configuration for a device
    ListCheckConfigurationMac { device_id: i64 },
    /// Fetch Linux check configuration for a device
    ListCheckConfigurationLinux { device_id: i64 },
    /// List outages for a site within a date range
    ListOutages {
        site_id: i64,
        start_date: String,
        end_date: String,
    },
    /// Clear a failed check
    ClearCheck { check_id: i64 },
    /// Attach a note to a check
    AddCheckNote { check_id: i64, note: String },

    // ── Asset tracking ──
    /// List tracked hardware for a device
    ListHardware { device_id: i64 },
    /// List tracked software for a device
    ListSoftware { device_id: i64 },
    /// Fetch the full asset bundle for a device
    ListDeviceAssetDetails { device_id: i64 },
    /// List software license groups
    ListLicenseGroups,

    // ── Patch management ──
    /// List patches for a device
    ListPatches { device_id: i64 },
    /// Approve patches (comma-separated ids) on a device
    ApprovePatch { device_id: i64, patch_ids: String },
    /// Ignore patches (comma-separated ids) on a device
    IgnorePatch { device_id: i64, patch_ids: String },

    // ── Antivirus ──
    /// List supported antivirus products
    ListAntivirusProducts,
    /// List antivirus definitions for a device
    ListAntivirusDefinitions { device_id: i64 },
    /// List quarantined threats on a device
    ListQuarantine { device_id: i64 },
    /// Start an antivirus scan on a device
    StartScan { device_id: i64, scan_type: String },

    // ── Performance history ──
    /// Fetch performance samples for one check
    ListPerformanceHistory {
        device_id: i64,
        check_id: i64,
        start_date: String,
        end_date: String,
    },
    /// Fetch drive-space samples for a device
    ListDriveSpaceHistory {
        device_id: i64,
        start_date: String,
        end_date: String,
    },

    // ── Templates / backup / settings / users ──
    /// List monitoring templates
    ListTemplates,
    /// List backup sessions for a device
    ListBackupSessions { device_id: i64 },
    /// List wall-chart settings
    ListWallChartSettings,
    /// List general settings
    ListGeneralSettings,
    /// List Active Directory users on a device
    ListActiveDirectoryUsers { device_id: i64 },
    /// Run an automated task immediately
    RunTaskNow { task_id: i64 },

    // ── Site management ──
    /// Create a new client
    AddClient {
        name: String,
        contact_name: String,
        contact_email: String,
    },
    /// Create a new site beneath a client
    AddSite {
        client_id: i64,
        name: String,
        contact_name: String,
        contact_email: String,
    },
    /// Download the agent installation package for a site
    GetSiteInstallationPackage {
        site_id: i64,
        package_type: String,
    },
}
