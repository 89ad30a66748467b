use crate::{
    Agent, AgentId, Building, BuildingId, Floor, FloorId, Zone, ZoneId,
    ZoneType, requests,
};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the facility management backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.put(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.delete(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn list_buildings(&self) -> Result<Vec<Building>, ClientError> {
        let response = self.get("buildings").await?;
        ok_body(response).await
    }

    pub async fn get_building(
        &self,
        building_id: &BuildingId,
    ) -> Result<Building, ClientError> {
        let response = self.get(&format!("buildings/{building_id}")).await?;
        ok_body(response).await
    }

    pub async fn create_building(
        &self,
        details: &requests::BuildingDetails,
    ) -> Result<BuildingId, ClientError> {
        let response = self.post("buildings", details).await?;
        ok_body(response).await
    }

    pub async fn update_building(
        &self,
        building_id: &BuildingId,
        details: &requests::BuildingDetails,
    ) -> Result<Building, ClientError> {
        let response = self
            .put(&format!("buildings/{building_id}"), details)
            .await?;
        ok_body(response).await
    }

    pub async fn delete_building(
        &self,
        building_id: &BuildingId,
    ) -> Result<(), ClientError> {
        let response =
            self.delete(&format!("buildings/{building_id}")).await?;
        ok_empty(response).await
    }

    pub async fn list_floors(
        &self,
        building_id: &BuildingId,
    ) -> Result<Vec<Floor>, ClientError> {
        let response =
            self.get(&format!("buildings/{building_id}/floors")).await?;
        ok_body(response).await
    }

    pub async fn list_zones(
        &self,
        floor_id: &FloorId,
    ) -> Result<Vec<Zone>, ClientError> {
        let response = self.get(&format!("floors/{floor_id}/zones")).await?;
        ok_body(response).await
    }

    pub async fn update_zone_settings(
        &self,
        zone_id: &ZoneId,
        settings: &requests::ZoneSettings,
    ) -> Result<Zone, ClientError> {
        let response = self
            .put(&format!("zones/{zone_id}/settings"), settings)
            .await?;
        ok_body(response).await
    }

    /// Reference data for the zone settings form.
    pub async fn list_zone_types(&self) -> Result<Vec<ZoneType>, ClientError> {
        let response = self.get("zone-types").await?;
        ok_body(response).await
    }

    pub async fn list_agents(&self) -> Result<Vec<Agent>, ClientError> {
        let response = self.get("agents").await?;
        ok_body(response).await
    }

    pub async fn update_agent(
        &self,
        agent_id: &AgentId,
        details: &requests::UpdateAgent,
    ) -> Result<Agent, ClientError> {
        let response = self.put(&format!("agents/{agent_id}"), details).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
