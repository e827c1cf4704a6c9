// ── Zone domain type ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Closed set of zone types the backend accepts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ZoneType {
    Vip,
    #[default]
    Internal,
    External,
}

/// A named parking area with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Server-assigned, immutable after creation.
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub capacity: u32,
    /// Server-maintained, derived from the occupancy of assigned spaces.
    /// `None` when the backend revision omits it; `ViewStore` can estimate
    /// a fallback from the space collection.
    pub available_capacity: Option<u32>,
    pub zone_type: ZoneType,
    pub is_active: bool,
}

impl Zone {
    /// The letter spaces in this zone are coded with: first alphabetic
    /// character of the name, uppercased. `A` when the name has none.
    pub fn prefix_letter(&self) -> char {
        self.name
            .chars()
            .find(char::is_ascii_alphabetic)
            .map_or('A', |c| c.to_ascii_uppercase())
    }
}

/// Client-side zone fields for create/update — everything the server
/// doesn't assign itself. Validated before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneDraft {
    pub name: String,
    pub description: Option<String>,
    pub capacity: u32,
    pub zone_type: ZoneType,
    pub is_active: bool,
}
