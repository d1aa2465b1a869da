// N-sight API response types
//
// Models for the XML payloads returned by the data-extraction services.
// Every list service wraps its records as `<result><items><kind>...</kind>
// </items></result>`; the `*List` wrappers below mirror that nesting and
// stay crate-private -- endpoint methods hand out plain `Vec<T>`.
//
// Fields use `#[serde(default)]` liberally because the API omits elements
// it has no data for. JSON serialization uses snake_case names, so the
// dispatchers re-publish these records without a separate view type.

use serde::{Deserialize, Serialize};

// ── Clients ──────────────────────────────────────────────────────────

/// One customer account on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename(deserialize = "clientid", serialize = "client_id"), default)]
    pub client_id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ClientList {
    #[serde(default)]
    items: ClientItems,
}

#[derive(Debug, Default, Deserialize)]
struct ClientItems {
    #[serde(default, rename = "client")]
    entries: Vec<Client>,
}

impl ClientList {
    pub(crate) fn into_vec(self) -> Vec<Client> {
        self.items.entries
    }
}

// ── Sites ────────────────────────────────────────────────────────────

/// One site beneath a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename(deserialize = "siteid", serialize = "site_id"), default)]
    pub site_id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SiteList {
    #[serde(default)]
    items: SiteItems,
}

#[derive(Debug, Default, Deserialize)]
struct SiteItems {
    #[serde(default, rename = "site")]
    entries: Vec<Site>,
}

impl SiteList {
    pub(crate) fn into_vec(self) -> Vec<Site> {
        self.items.entries
    }
}

// ── Servers ──────────────────────────────────────────────────────────

/// A monitored server at a site.
///
/// `online` is the raw 0/1 wire flag and `last_boot_time` the raw
/// epoch-seconds string; normalization happens in `nsight-core`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    #[serde(rename(deserialize = "serverid", serialize = "server_id"), default)]
    pub server_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub online: i64,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub device_serial: String,
    #[serde(default)]
    pub last_boot_time: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ServerList {
    #[serde(default)]
    items: ServerItems,
}

#[derive(Debug, Default, Deserialize)]
struct ServerItems {
    #[serde(default, rename = "server")]
    entries: Vec<Server>,
}

impl ServerList {
    pub(crate) fn into_vec(self) -> Vec<Server> {
        self.items.entries
    }
}

// ── Workstations ─────────────────────────────────────────────────────

/// A monitored workstation at a site. Same shape as [`Server`]; the API
/// treats the two as distinct resource kinds, so we do too.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workstation {
    #[serde(
        rename(deserialize = "workstationid", serialize = "workstation_id"),
        default
    )]
    pub workstation_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub online: i64,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub device_serial: String,
    #[serde(default)]
    pub last_boot_time: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WorkstationList {
    #[serde(default)]
    items: WorkstationItems,
}

#[derive(Debug, Default, Deserialize)]
struct WorkstationItems {
    #[serde(default, rename = "workstation")]
    entries: Vec<Workstation>,
}

impl WorkstationList {
    pub(crate) fn into_vec(self) -> Vec<Workstation> {
        self.items.entries
    }
}

// ── Generic devices ──────────────────────────────────────────────────

/// Device record from `list_devices` / `list_devices_at_client`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    #[serde(rename(deserialize = "deviceid", serialize = "device_id"), default)]
    pub device_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub online: i64,
    #[serde(rename(deserialize = "siteid", serialize = "site_id"), default)]
    pub site_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DeviceList {
    #[serde(default)]
    items: DeviceItems,
}

#[derive(Debug, Default, Deserialize)]
struct DeviceItems {
    #[serde(default, rename = "device")]
    entries: Vec<Device>,
}

impl DeviceList {
    pub(crate) fn into_vec(self) -> Vec<Device> {
        self.items.entries
    }
}

// ── Agentless assets ─────────────────────────────────────────────────

/// Network-discovered asset without an installed agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentlessAsset {
    #[serde(rename(deserialize = "assetid", serialize = "asset_id"), default)]
    pub asset_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub mac: String,
    #[serde(default)]
    pub vendor: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AgentlessAssetList {
    #[serde(default)]
    items: AgentlessAssetItems,
}

#[derive(Debug, Default, Deserialize)]
struct AgentlessAssetItems {
    #[serde(default, rename = "asset")]
    entries: Vec<AgentlessAsset>,
}

impl AgentlessAssetList {
    pub(crate) fn into_vec(self) -> Vec<AgentlessAsset> {
        self.items.entries
    }
}

// ── Checks ───────────────────────────────────────────────────────────

/// A monitoring check. Shared by the check-listing, monitoring-detail,
/// check-configuration, and outage services, which all return the same
/// record shape with different subsets populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    #[serde(rename(deserialize = "checkid", serialize = "check_id"), default)]
    pub check_id: i64,
    #[serde(rename(deserialize = "deviceid", serialize = "device_id"), default)]
    pub device_id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CheckList {
    #[serde(default)]
    items: CheckItems,
}

#[derive(Debug, Default, Deserialize)]
struct CheckItems {
    #[serde(default, rename = "check")]
    entries: Vec<Check>,
}

impl CheckList {
    pub(crate) fn into_vec(self) -> Vec<Check> {
        self.items.entries
    }
}

// ── Asset tracking ───────────────────────────────────────────────────

/// One named custom field pair from the asset-tracking scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomField {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// A tracked hardware component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HardwareItem {
    #[serde(rename(deserialize = "hardwareid", serialize = "hardware_id"), default)]
    pub hardware_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub hardware_type: i64,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub deleted: i64,
    #[serde(default)]
    pub modified: i64,
}

/// A tracked software installation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoftwareItem {
    #[serde(rename(deserialize = "softwareid", serialize = "software_id"), default)]
    pub software_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(
        rename(deserialize = "installdate", serialize = "install_date"),
        default
    )]
    pub install_date: String,
    #[serde(rename = "type", default)]
    pub software_type: String,
    #[serde(default)]
    pub deleted: i64,
    #[serde(default)]
    pub modified: i64,
}

/// Full asset-tracking bundle for one device: summary fields, up to ten
/// custom pairs, and the hardware/software inventories.
///
/// `role` is carried opaquely -- the dashboard does not document its
/// value set, so no enumeration is inferred.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetDetails {
    #[serde(default)]
    pub client: String,
    #[serde(
        rename(deserialize = "chassistype", serialize = "chassis_type"),
        default
    )]
    pub chassis_type: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub mac1: String,
    #[serde(default)]
    pub mac2: String,
    #[serde(default)]
    pub mac3: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub os: String,
    #[serde(
        rename(deserialize = "serialnumber", serialize = "serial_number"),
        default
    )]
    pub serial_number: String,
    #[serde(rename(deserialize = "productkey", serialize = "product_key"), default)]
    pub product_key: String,
    #[serde(default)]
    pub role: String,
    #[serde(rename(deserialize = "servicepack", serialize = "service_pack"), default)]
    pub service_pack: String,
    #[serde(default)]
    pub ram: i64,
    #[serde(rename(deserialize = "scantime", serialize = "scan_time"), default)]
    pub scan_time: String,
    #[serde(default)]
    pub custom1: CustomField,
    #[serde(default)]
    pub custom2: CustomField,
    #[serde(default)]
    pub custom3: CustomField,
    #[serde(default)]
    pub custom4: CustomField,
    #[serde(default)]
    pub custom5: CustomField,
    #[serde(default)]
    pub custom6: CustomField,
    #[serde(default)]
    pub custom7: CustomField,
    #[serde(default)]
    pub custom8: CustomField,
    #[serde(default)]
    pub custom9: CustomField,
    #[serde(default)]
    pub custom10: CustomField,
    #[serde(
        default,
        deserialize_with = "hardware_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub hardware: Vec<HardwareItem>,
    #[serde(
        default,
        deserialize_with = "software_items",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub software: Vec<SoftwareItem>,
}

impl AssetDetails {
    /// Heuristic for "no asset data": the dashboard answers with an
    /// empty document rather than an error for devices that have never
    /// completed an asset scan.
    pub fn is_unscanned(&self) -> bool {
        self.manufacturer.is_empty() && self.model.is_empty() && self.hardware.is_empty()
    }
}

/// Unwrap `<hardware><item>...</item></hardware>` into a flat list.
fn hardware_items<'de, D>(deserializer: D) -> Result<Vec<HardwareItem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Default, Deserialize)]
    struct Wrapper {
        #[serde(default, rename = "item")]
        item: Vec<HardwareItem>,
    }
    Ok(Wrapper::deserialize(deserializer)?.item)
}

/// Unwrap `<software><item>...</item></software>` into a flat list.
fn software_items<'de, D>(deserializer: D) -> Result<Vec<SoftwareItem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Default, Deserialize)]
    struct Wrapper {
        #[serde(default, rename = "item")]
        item: Vec<SoftwareItem>,
    }
    Ok(Wrapper::deserialize(deserializer)?.item)
}

/// `list_hardware` / `list_software` return bare `<items><item>` lists.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct HardwareList {
    #[serde(default, deserialize_with = "hardware_items")]
    items: Vec<HardwareItem>,
}

impl HardwareList {
    pub(crate) fn into_vec(self) -> Vec<HardwareItem> {
        self.items
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SoftwareList {
    #[serde(default, deserialize_with = "software_items")]
    items: Vec<SoftwareItem>,
}

impl SoftwareList {
    pub(crate) fn into_vec(self) -> Vec<SoftwareItem> {
        self.items
    }
}

/// A software license group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseGroup {
    #[serde(rename(deserialize = "groupid", serialize = "group_id"), default)]
    pub group_id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LicenseGroupList {
    #[serde(default)]
    items: LicenseGroupItems,
}

#[derive(Debug, Default, Deserialize)]
struct LicenseGroupItems {
    #[serde(default, rename = "group")]
    entries: Vec<LicenseGroup>,
}

impl LicenseGroupList {
    pub(crate) fn into_vec(self) -> Vec<LicenseGroup> {
        self.items.entries
    }
}

// ── Patch management ─────────────────────────────────────────────────

/// One patch known for a device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patch {
    #[serde(rename(deserialize = "patchid", serialize = "patch_id"), default)]
    pub patch_id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub severity: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PatchList {
    #[serde(default)]
    items: PatchItems,
}

#[derive(Debug, Default, Deserialize)]
struct PatchItems {
    #[serde(default, rename = "patch")]
    entries: Vec<Patch>,
}

impl PatchList {
    pub(crate) fn into_vec(self) -> Vec<Patch> {
        self.items.entries
    }
}

// ── Antivirus ────────────────────────────────────────────────────────

/// A supported antivirus product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntivirusProduct {
    #[serde(rename(deserialize = "productid", serialize = "product_id"), default)]
    pub product_id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AntivirusProductList {
    #[serde(default)]
    items: AntivirusProductItems,
}

#[derive(Debug, Default, Deserialize)]
struct AntivirusProductItems {
    #[serde(default, rename = "product")]
    entries: Vec<AntivirusProduct>,
}

impl AntivirusProductList {
    pub(crate) fn into_vec(self) -> Vec<AntivirusProduct> {
        self.items.entries
    }
}

/// Definition state for a device's antivirus installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AntivirusDefinition {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AntivirusDefinitionList {
    #[serde(default)]
    items: AntivirusDefinitionItems,
}

#[derive(Debug, Default, Deserialize)]
struct AntivirusDefinitionItems {
    #[serde(default, rename = "definition")]
    entries: Vec<AntivirusDefinition>,
}

impl AntivirusDefinitionList {
    pub(crate) fn into_vec(self) -> Vec<AntivirusDefinition> {
        self.items.entries
    }
}

/// A quarantined threat on a device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarantineItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub threat: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuarantineList {
    #[serde(default)]
    items: QuarantineItems,
}

#[derive(Debug, Default, Deserialize)]
struct QuarantineItems {
    #[serde(default, rename = "item")]
    entries: Vec<QuarantineItem>,
}

impl QuarantineList {
    pub(crate) fn into_vec(self) -> Vec<QuarantineItem> {
        self.items.entries
    }
}

// ── Performance history ──────────────────────────────────────────────

/// One sample from the performance or drive-space history services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceData {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PerformanceDataList {
    #[serde(default)]
    items: PerformanceDataItems,
}

#[derive(Debug, Default, Deserialize)]
struct PerformanceDataItems {
    #[serde(default, rename = "data")]
    entries: Vec<PerformanceData>,
}

impl PerformanceDataList {
    pub(crate) fn into_vec(self) -> Vec<PerformanceData> {
        self.items.entries
    }
}

// ── Templates / backup / settings / users ────────────────────────────

/// A monitoring template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename(deserialize = "templateid", serialize = "template_id"), default)]
    pub template_id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TemplateList {
    #[serde(default)]
    items: TemplateItems,
}

#[derive(Debug, Default, Deserialize)]
struct TemplateItems {
    #[serde(default, rename = "template")]
    entries: Vec<Template>,
}

impl TemplateList {
    pub(crate) fn into_vec(self) -> Vec<Template> {
        self.items.entries
    }
}

/// One backup & recovery session for a device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupSession {
    #[serde(rename = "type", default)]
    pub session_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct BackupSessionList {
    #[serde(default)]
    items: BackupSessionItems,
}

#[derive(Debug, Default, Deserialize)]
struct BackupSessionItems {
    #[serde(default, rename = "session")]
    entries: Vec<BackupSession>,
}

impl BackupSessionList {
    pub(crate) fn into_vec(self) -> Vec<BackupSession> {
        self.items.entries
    }
}

/// A dashboard setting (wall-chart or general).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SettingList {
    #[serde(default)]
    items: SettingItems,
}

#[derive(Debug, Default, Deserialize)]
struct SettingItems {
    #[serde(default, rename = "setting")]
    entries: Vec<Setting>,
}

impl SettingList {
    pub(crate) fn into_vec(self) -> Vec<Setting> {
        self.items.entries
    }
}

/// An Active Directory user discovered on a device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdUser {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AdUserList {
    #[serde(default)]
    items: AdUserItems,
}

#[derive(Debug, Default, Deserialize)]
struct AdUserItems {
    #[serde(default, rename = "user")]
    entries: Vec<AdUser>,
}

impl AdUserList {
    pub(crate) fn into_vec(self) -> Vec<AdUser> {
        self.items.entries
    }
}
