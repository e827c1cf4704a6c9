//! Wire types for the parking backend REST API.
//!
//! All types match the JSON the backend actually emits. Field names use
//! camelCase via `#[serde(rename_all = "camelCase")]`; historic naming
//! drift between backend revisions (`idZone` vs `zoneId`, `isReserved` vs
//! `reserved`) is absorbed with serde aliases here so it never leaks into
//! the domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Zones ────────────────────────────────────────────────────────────

/// Zone as returned by `GET /zones` and `GET /zones/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub capacity: u32,
    /// Server-derived from the occupancy of assigned spaces. Older backend
    /// revisions omit it entirely.
    #[serde(default)]
    pub available_capacity: Option<u32>,
    /// One of: `VIP`, `INTERNAL`, `EXTERNAL`.
    #[serde(rename = "type")]
    pub zone_type: String,
    #[serde(default = "default_active", alias = "active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Body for `POST /zones` and `PUT /zones/{id}` — everything but the
/// server-assigned fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZonePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub zone_type: String,
    pub is_active: bool,
}

// ── Spaces ───────────────────────────────────────────────────────────

/// Space as returned by `GET /spaces/` and `GET /spaces/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResponse {
    pub id: Uuid,
    /// Human-readable code, e.g. `A-001`. The backend keeps the Spanish
    /// column name on the wire.
    #[serde(rename = "codigo", alias = "code")]
    pub code: String,
    #[serde(rename = "idZone", alias = "zoneId")]
    pub zone_id: Uuid,
    /// One of: `AVAILABLE`, `OCCUPIED`, `MAINTENANCE`.
    pub status: String,
    #[serde(default, alias = "reserved")]
    pub is_reserved: bool,
    /// 1..=10; backend defaults to 5 when absent.
    #[serde(default)]
    pub priority: Option<u8>,
    /// Denormalized display name some list endpoints include.
    #[serde(default)]
    pub zone_name: Option<String>,
}

/// Body for `POST /spaces/` and `PUT /spaces/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacePayload {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "idZone")]
    pub zone_id: Uuid,
    pub status: String,
    pub is_reserved: bool,
    pub priority: u8,
}
