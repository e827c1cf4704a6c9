//! Zone endpoints: `GET/POST /zones`, `GET/PUT/DELETE /zones/{id}`.

use uuid::Uuid;

use crate::client::ParkingClient;
use crate::error::Error;
use crate::types::{ZonePayload, ZoneResponse};

impl ParkingClient {
    /// List all zones. Order is server-defined and not guaranteed stable.
    pub async fn list_zones(&self) -> Result<Vec<ZoneResponse>, Error> {
        self.get("zones").await
    }

    /// Fetch a single zone. Fails with `Error::Http { status: 404, .. }`
    /// when the id is unknown.
    pub async fn get_zone(&self, id: Uuid) -> Result<ZoneResponse, Error> {
        self.get(&format!("zones/{id}")).await
    }

    /// Create a zone. The response carries the server-assigned id.
    pub async fn create_zone(&self, payload: &ZonePayload) -> Result<ZoneResponse, Error> {
        self.post("zones", payload).await
    }

    /// Update a zone in place.
    pub async fn update_zone(
        &self,
        id: Uuid,
        payload: &ZonePayload,
    ) -> Result<ZoneResponse, Error> {
        self.put(&format!("zones/{id}"), payload).await
    }

    /// Delete a zone. Success is a bare 204.
    pub async fn delete_zone(&self, id: Uuid) -> Result<(), Error> {
        self.delete(&format!("zones/{id}")).await
    }
}
