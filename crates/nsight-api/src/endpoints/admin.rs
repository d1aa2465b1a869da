// Remaining dashboard services: templates, backup sessions, settings,
// Active Directory users, task execution, and client/site management.

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{
    AdUser, AdUserList, BackupSession, BackupSessionList, Setting, SettingList, Template,
    TemplateList,
};
use crate::requests::{AddClientRequest, AddSiteRequest, InstallationPackageRequest};

impl ApiClient {
    /// List monitoring templates. (`list_templates`)
    pub async fn list_templates(&self) -> Result<Vec<Template>, Error> {
        let list: TemplateList = self.call_decoded("list_templates", &[]).await?;
        Ok(list.into_vec())
    }

    /// List backup & recovery sessions for a device. (`list_backup_sessions`)
    pub async fn list_backup_sessions(&self, device_id: i64) -> Result<Vec<BackupSession>, Error> {
        let list: BackupSessionList = self
            .call_decoded(
                "list_backup_sessions",
                &[("deviceid", device_id.to_string())],
            )
            .await?;
        Ok(list.into_vec())
    }

    /// List wall-chart settings. (`list_wall_chart_settings`)
    pub async fn list_wall_chart_settings(&self) -> Result<Vec<Setting>, Error> {
        let list: SettingList = self.call_decoded("list_wall_chart_settings", &[]).await?;
        Ok(list.into_vec())
    }

    /// List general settings. (`list_general_settings`)
    pub async fn list_general_settings(&self) -> Result<Vec<Setting>, Error> {
        let list: SettingList = self.call_decoded("list_general_settings", &[]).await?;
        Ok(list.into_vec())
    }

    /// List Active Directory users discovered on a device.
    /// (`list_active_directory_users`)
    pub async fn list_active_directory_users(&self, device_id: i64) -> Result<Vec<AdUser>, Error> {
        let list: AdUserList = self
            .call_decoded(
                "list_active_directory_users",
                &[("deviceid", device_id.to_string())],
            )
            .await?;
        Ok(list.into_vec())
    }

    /// Run an automated task immediately. (`run_task_now`)
    pub async fn run_task_now(&self, task_id: i64) -> Result<(), Error> {
        self.call("run_task_now", &[("taskid", task_id.to_string())])
            .await?;
        Ok(())
    }

    /// Create a new client. (`add_client`)
    pub async fn add_client(&self, request: &AddClientRequest) -> Result<(), Error> {
        self.call("add_client", &request.params()).await?;
        Ok(())
    }

    /// Create a new site beneath a client. (`add_site`)
    pub async fn add_site(&self, request: &AddSiteRequest) -> Result<(), Error> {
        self.call("add_site", &request.params()).await?;
        Ok(())
    }

    /// Download the agent installation package for a site.
    /// (`get_site_installation_package`) Returns the raw package bytes.
    pub async fn site_installation_package(
        &self,
        request: &InstallationPackageRequest,
    ) -> Result<Vec<u8>, Error> {
        let body = self
            .call("get_site_installation_package", &request.params())
            .await?;
        Ok(body.into_bytes())
    }
}
