// ── View-owned entity store ──
//
// Each consuming view constructs and owns one of these rather than reading
// ambient globals; the session hands out references. One collection per
// entity type, both refreshed independently.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use uuid::Uuid;

use super::Collection;
use crate::model::{Space, SpaceStatus, Zone};

/// Read-mostly mirror of the backend's zones and spaces for one view.
pub struct ViewStore {
    zones: Collection<Zone>,
    spaces: Collection<Space>,
}

impl ViewStore {
    pub fn new() -> Self {
        Self {
            zones: Collection::new(),
            spaces: Collection::new(),
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn zones_snapshot(&self) -> Arc<Vec<Zone>> {
        self.zones.snapshot()
    }

    pub fn spaces_snapshot(&self) -> Arc<Vec<Space>> {
        self.spaces.snapshot()
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn space_count(&self) -> usize {
        self.spaces.len()
    }

    // ── Refresh application ──────────────────────────────────────────

    pub fn apply_zones(&self, zones: Vec<Zone>) {
        self.zones.replace(zones);
    }

    pub fn apply_spaces(&self, spaces: Vec<Space>) {
        self.spaces.replace(spaces);
    }

    // ── Lookups ──────────────────────────────────────────────────────

    pub fn zone_by_id(&self, id: Uuid) -> Option<Zone> {
        self.zones.snapshot().iter().find(|z| z.id == id).cloned()
    }

    /// The owning zone of a space, resolved through the foreign key.
    pub fn zone_of(&self, space: &Space) -> Option<Zone> {
        self.zone_by_id(space.zone_id)
    }

    /// The zone's available capacity, estimated from the space collection
    /// when the backend omitted it: capacity minus occupied spaces in the
    /// zone, floored at zero.
    pub fn effective_available_capacity(&self, zone: &Zone) -> u32 {
        if let Some(available) = zone.available_capacity {
            return available.min(zone.capacity);
        }

        let occupied = self
            .spaces
            .snapshot()
            .iter()
            .filter(|s| s.zone_id == zone.id && s.status == SpaceStatus::Occupied)
            .count();
        let occupied = u32::try_from(occupied).unwrap_or(u32::MAX);
        zone.capacity.saturating_sub(occupied)
    }

    // ── Subscriptions & metadata ─────────────────────────────────────

    pub fn subscribe_zones(&self) -> watch::Receiver<Arc<Vec<Zone>>> {
        self.zones.subscribe()
    }

    pub fn subscribe_spaces(&self) -> watch::Receiver<Arc<Vec<Space>>> {
        self.spaces.subscribe()
    }

    pub fn zones_refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.zones.refreshed_at()
    }

    pub fn spaces_refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.spaces.refreshed_at()
    }

    /// How long ago the older of the two collections was refreshed,
    /// `None` until both have loaded once.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        let oldest = self.zones_refreshed_at().min(self.spaces_refreshed_at())?;
        Some(Utc::now() - oldest)
    }
}

impl Default for ViewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::ZoneType;

    fn zone(capacity: u32, available: Option<u32>) -> Zone {
        Zone {
            id: Uuid::new_v4(),
            name: "North".into(),
            description: None,
            capacity,
            available_capacity: available,
            zone_type: ZoneType::Internal,
            is_active: true,
        }
    }

    fn space(zone_id: Uuid, status: SpaceStatus) -> Space {
        Space {
            id: Uuid::new_v4(),
            code: "A-001".into(),
            zone_id,
            status,
            reserved: false,
            priority: 5,
        }
    }

    #[test]
    fn zone_of_resolves_the_foreign_key() {
        let store = ViewStore::new();
        let z = zone(10, None);
        let s = space(z.id, SpaceStatus::Available);
        store.apply_zones(vec![z.clone()]);
        store.apply_spaces(vec![s.clone()]);

        assert_eq!(store.zone_of(&s).unwrap().id, z.id);
        assert!(store.zone_of(&space(Uuid::new_v4(), SpaceStatus::Available)).is_none());
    }

    #[test]
    fn reported_available_capacity_wins_over_the_estimate() {
        let store = ViewStore::new();
        let z = zone(10, Some(4));
        store.apply_spaces(vec![space(z.id, SpaceStatus::Occupied)]);
        assert_eq!(store.effective_available_capacity(&z), 4);
    }

    #[test]
    fn missing_available_capacity_is_estimated_from_spaces() {
        let store = ViewStore::new();
        let z = zone(10, None);
        store.apply_spaces(vec![
            space(z.id, SpaceStatus::Occupied),
            space(z.id, SpaceStatus::Occupied),
            space(z.id, SpaceStatus::Available),
            space(Uuid::new_v4(), SpaceStatus::Occupied),
        ]);
        assert_eq!(store.effective_available_capacity(&z), 8);
    }

    #[test]
    fn estimate_never_goes_negative() {
        let store = ViewStore::new();
        let z = zone(1, None);
        store.apply_spaces(vec![
            space(z.id, SpaceStatus::Occupied),
            space(z.id, SpaceStatus::Occupied),
        ]);
        assert_eq!(store.effective_available_capacity(&z), 0);
    }

    #[test]
    fn data_age_requires_both_collections() {
        let store = ViewStore::new();
        assert!(store.data_age().is_none());
        store.apply_zones(Vec::new());
        assert!(store.data_age().is_none());
        store.apply_spaces(Vec::new());
        assert!(store.data_age().is_some());
    }
}
