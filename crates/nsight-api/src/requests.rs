// ── Typed request structs for multi-parameter services ──
//
// Every service that takes more than a single id gets a request struct,
// so a missing parameter is a compile error rather than a malformed
// query string. Single-id services take the id directly.

/// `list_outages`: outages for a site within a date range.
#[derive(Debug, Clone)]
pub struct OutagesQuery {
    pub site_id: i64,
    pub start_date: String,
    pub end_date: String,
}

impl OutagesQuery {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("siteid", self.site_id.to_string()),
            ("startdate", self.start_date.clone()),
            ("enddate", self.end_date.clone()),
        ]
    }
}

/// `list_performance_history`: samples for one check on one device.
#[derive(Debug, Clone)]
pub struct PerformanceHistoryQuery {
    pub device_id: i64,
    pub check_id: i64,
    pub start_date: String,
    pub end_date: String,
}

impl PerformanceHistoryQuery {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("deviceid", self.device_id.to_string()),
            ("checkid", self.check_id.to_string()),
            ("startdate", self.start_date.clone()),
            ("enddate", self.end_date.clone()),
        ]
    }
}

/// `list_drive_space_history`: drive-space samples for one device.
#[derive(Debug, Clone)]
pub struct DriveSpaceHistoryQuery {
    pub device_id: i64,
    pub start_date: String,
    pub end_date: String,
}

impl DriveSpaceHistoryQuery {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("deviceid", self.device_id.to_string()),
            ("startdate", self.start_date.clone()),
            ("enddate", self.end_date.clone()),
        ]
    }
}

/// `approve_patch` / `ignore_patch`: a set of patches on one device.
#[derive(Debug, Clone)]
pub struct PatchSelection {
    pub device_id: i64,
    pub patch_ids: Vec<i64>,
}

impl PatchSelection {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let ids = self
            .patch_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        vec![
            ("deviceid", self.device_id.to_string()),
            ("patchids", ids),
        ]
    }
}

/// `add_client`: create a new client account.
#[derive(Debug, Clone)]
pub struct AddClientRequest {
    pub name: String,
    pub contact_name: String,
    pub contact_email: String,
}

impl AddClientRequest {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("contactname", self.contact_name.clone()),
            ("contactemail", self.contact_email.clone()),
        ]
    }
}

/// `add_site`: create a new site beneath a client.
#[derive(Debug, Clone)]
pub struct AddSiteRequest {
    pub client_id: i64,
    pub name: String,
    pub contact_name: String,
    pub contact_email: String,
}

impl AddSiteRequest {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("clientid", self.client_id.to_string()),
            ("name", self.name.clone()),
            ("contactname", self.contact_name.clone()),
            ("contactemail", self.contact_email.clone()),
        ]
    }
}

/// `get_site_installation_package`: agent installer for a site.
#[derive(Debug, Clone)]
pub struct InstallationPackageRequest {
    pub site_id: i64,
    pub package_type: String,
}

impl InstallationPackageRequest {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("siteid", self.site_id.to_string()),
            ("packagetype", self.package_type.clone()),
        ]
    }
}
