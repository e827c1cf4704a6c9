// ── API-to-domain type conversions ──
//
// Bridges raw `parkdash_api` wire types into canonical domain types.
// Each `From` impl normalizes names, parses status strings into strong
// enums, clamps out-of-range values, and applies the reserved-flag
// invariant once, at the boundary.

use std::str::FromStr;

use tracing::debug;

use parkdash_api::types::{SpacePayload, SpaceResponse, ZonePayload, ZoneResponse};

use crate::model::{DEFAULT_PRIORITY, Space, SpaceDraft, SpaceStatus, Zone, ZoneDraft, ZoneType};

// ── Zone ───────────────────────────────────────────────────────────

impl From<ZoneResponse> for Zone {
    fn from(z: ZoneResponse) -> Self {
        let zone_type = ZoneType::from_str(&z.zone_type).unwrap_or_else(|_| {
            debug!(raw = %z.zone_type, "unknown zone type, defaulting");
            ZoneType::default()
        });

        // availableCapacity never exceeds capacity and never goes negative.
        let available_capacity = z.available_capacity.map(|a| a.min(z.capacity));

        Self {
            id: z.id,
            name: z.name,
            description: z.description.filter(|d| !d.is_empty()),
            capacity: z.capacity,
            available_capacity,
            zone_type,
            is_active: z.is_active,
        }
    }
}

impl From<&ZoneDraft> for ZonePayload {
    fn from(d: &ZoneDraft) -> Self {
        Self {
            name: d.name.clone(),
            description: d.description.clone(),
            capacity: d.capacity,
            zone_type: d.zone_type.to_string(),
            is_active: d.is_active,
        }
    }
}

// ── Space ──────────────────────────────────────────────────────────

impl From<SpaceResponse> for Space {
    fn from(s: SpaceResponse) -> Self {
        let status = SpaceStatus::from_str(&s.status).unwrap_or_else(|_| {
            debug!(raw = %s.status, "unknown space status, defaulting");
            SpaceStatus::default()
        });

        // An occupied space is never simultaneously flagged reserved.
        let reserved = s.is_reserved && status != SpaceStatus::Occupied;

        let priority = s
            .priority
            .unwrap_or(DEFAULT_PRIORITY)
            .clamp(1, 10);

        Self {
            id: s.id,
            code: s.code,
            zone_id: s.zone_id,
            status,
            reserved,
            priority,
        }
    }
}

impl From<&SpaceDraft> for SpacePayload {
    fn from(d: &SpaceDraft) -> Self {
        Self {
            code: d.code.clone(),
            zone_id: d.zone_id,
            status: d.status.to_string(),
            is_reserved: d.reserved,
            priority: d.priority,
        }
    }
}
