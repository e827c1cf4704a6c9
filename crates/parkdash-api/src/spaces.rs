//! Space endpoints: `GET/POST /spaces/`, `GET/PUT/DELETE /spaces/{id}`.
//!
//! The collection routes carry a trailing slash — that is what the backend
//! actually serves; dropping it earns a redirect the client won't follow
//! for POST.

use uuid::Uuid;

use crate::client::ParkingClient;
use crate::error::Error;
use crate::types::{SpacePayload, SpaceResponse};

impl ParkingClient {
    /// List all spaces. Order is server-defined and not guaranteed stable.
    pub async fn list_spaces(&self) -> Result<Vec<SpaceResponse>, Error> {
        self.get("spaces/").await
    }

    /// Fetch a single space.
    pub async fn get_space(&self, id: Uuid) -> Result<SpaceResponse, Error> {
        self.get(&format!("spaces/{id}")).await
    }

    /// Create a space. The suggested `codigo` in the payload is advisory:
    /// the server may reassign it, and the response is canonical.
    pub async fn create_space(&self, payload: &SpacePayload) -> Result<SpaceResponse, Error> {
        self.post("spaces/", payload).await
    }

    /// Update a space in place.
    pub async fn update_space(
        &self,
        id: Uuid,
        payload: &SpacePayload,
    ) -> Result<SpaceResponse, Error> {
        self.put(&format!("spaces/{id}"), payload).await
    }

    /// Delete a space. Success is a bare 204.
    pub async fn delete_space(&self, id: Uuid) -> Result<(), Error> {
        self.delete(&format!("spaces/{id}")).await
    }
}
