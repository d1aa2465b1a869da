//! Output tree model for the bulk exporter.
//!
//! These are the nodes of the final JSON document: an ordered forest of
//! clients, each holding sites, each holding servers and workstations.
//! All normalization (online flag, boot-time formatting) is already
//! applied by the time a node exists -- the serializers here never touch
//! field values.

use serde::Serialize;

use nsight_api::models::AssetDetails;

/// Fields shared by server and workstation nodes.
///
/// Optional strings are omitted from the JSON when empty, and the asset
/// bundle is omitted entirely when none was found for the device.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceDetail {
    pub online: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub os: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub manufacturer: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub model: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub serial_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_boot_time: String,
    #[serde(rename = "asset_details", skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetDetails>,
}

/// A server within a site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerNode {
    #[serde(rename = "server_id")]
    pub id: i64,
    #[serde(rename = "server_name")]
    pub name: String,
    #[serde(flatten)]
    pub detail: DeviceDetail,
}

/// A workstation within a site. Same shape as [`ServerNode`]; the two
/// are kept as distinct types because the API and the cache tables treat
/// them as distinct resource kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkstationNode {
    #[serde(rename = "workstation_id")]
    pub id: i64,
    #[serde(rename = "workstation_name")]
    pub name: String,
    #[serde(flatten)]
    pub detail: DeviceDetail,
}

/// A site within a client. Device lists are empty (and omitted from the
/// JSON) when the site has none of that kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteNode {
    pub site_id: i64,
    pub site_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<ServerNode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workstations: Vec<WorkstationNode>,
}

/// A client at the top of the forest. `sites` is always serialized, even
/// when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientNode {
    pub client_id: i64,
    pub client_name: String,
    pub sites: Vec<SiteNode>,
}
