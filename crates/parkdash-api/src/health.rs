//! Connection health probe.

use crate::client::ParkingClient;

impl ParkingClient {
    /// Probe backend reachability.
    ///
    /// Tries `GET {origin}/actuator/health` first; if that is unreachable or
    /// non-2xx, falls back to `GET /api/zones`. Any 2xx from either probe
    /// counts as connected. Never returns an error — an unreachable server
    /// is simply "not connected".
    pub async fn check_health(&self) -> bool {
        if let Ok(url) = self.origin_url("/actuator/health") {
            if self.probe(url).await {
                return true;
            }
        }

        match self.url("zones") {
            Ok(url) => self.probe(url).await,
            Err(_) => false,
        }
    }
}
