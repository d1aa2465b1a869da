// Entity-listing services: the client/site/server/workstation hierarchy
// plus the flat device views.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{
    AgentlessAsset, AgentlessAssetList, Client, ClientList, Device, DeviceList, Server,
    ServerList, Site, SiteList, Workstation, WorkstationList,
};

impl ApiClient {
    /// List all clients on the dashboard. (`list_clients`)
    pub async fn list_clients(&self) -> Result<Vec<Client>, Error> {
        debug!("listing clients");
        let list: ClientList = self.call_decoded("list_clients", &[]).await?;
        Ok(list.into_vec())
    }

    /// List the sites beneath a client. (`list_sites`)
    pub async fn list_sites(&self, client_id: i64) -> Result<Vec<Site>, Error> {
        debug!(client_id, "listing sites");
        let list: SiteList = self
            .call_decoded("list_sites", &[("clientid", client_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// List the servers at a site. (`list_servers`)
    pub async fn list_servers(&self, site_id: i64) -> Result<Vec<Server>, Error> {
        debug!(site_id, "listing servers");
        let list: ServerList = self
            .call_decoded("list_servers", &[("siteid", site_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// List the workstations at a site. (`list_workstations`)
    pub async fn list_workstations(&self, site_id: i64) -> Result<Vec<Workstation>, Error> {
        debug!(site_id, "listing workstations");
        let list: WorkstationList = self
            .call_decoded("list_workstations", &[("siteid", site_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// List all devices at a site, servers and workstations mixed. (`list_devices`)
    pub async fn list_devices(&self, site_id: i64) -> Result<Vec<Device>, Error> {
        let list: DeviceList = self
            .call_decoded("list_devices", &[("siteid", site_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }

    /// List all devices across a client. (`list_devices_at_client`)
    pub async fn list_devices_at_client(&self, client_id: i64) -> Result<Vec<Device>, Error> {
        let list: DeviceList = self
            .call_decoded(
                "list_devices_at_client",
                &[("clientid", client_id.to_string())],
            )
            .await?;
        Ok(list.into_vec())
    }

    /// List network-discovered agentless assets at a site. (`list_agentless_assets`)
    pub async fn list_agentless_assets(
        &self,
        site_id: i64,
    ) -> Result<Vec<AgentlessAsset>, Error> {
        let list: AgentlessAssetList = self
            .call_decoded("list_agentless_assets", &[("siteid", site_id.to_string())])
            .await?;
        Ok(list.into_vec())
    }
}
