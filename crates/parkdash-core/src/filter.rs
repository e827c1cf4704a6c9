// ── Filter predicates for collection snapshots ──
//
// Used by the CLI views to narrow snapshots without re-querying the API.

use uuid::Uuid;

use crate::model::{Space, SpaceStatus, Zone};

/// Combinable space filter. Each field is independently "any" when `None`;
/// set fields combine with AND semantics. There is no OR mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpaceFilter {
    pub zone: Option<Uuid>,
    pub status: Option<SpaceStatus>,
}

impl SpaceFilter {
    pub fn by_zone(zone: Uuid) -> Self {
        Self {
            zone: Some(zone),
            ..Self::default()
        }
    }

    pub fn by_status(status: SpaceStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn matches(&self, space: &Space) -> bool {
        self.zone.is_none_or(|z| space.zone_id == z)
            && self.status.is_none_or(|st| space.status == st)
    }

    /// Filter a snapshot. An empty result is a valid outcome, distinct from
    /// "not loaded" — the caller holds the snapshot, so loading already
    /// happened.
    pub fn apply(&self, spaces: &[Space]) -> Vec<Space> {
        spaces.iter().filter(|s| self.matches(s)).cloned().collect()
    }
}

/// Case-insensitive zone search over name and description, as the zones
/// view's search box does.
pub fn search_zones(zones: &[Zone], term: &str) -> Vec<Zone> {
    let needle = term.to_lowercase();
    zones
        .iter()
        .filter(|z| {
            z.name.to_lowercase().contains(&needle)
                || z.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::ZoneType;

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

    fn sample() -> (Uuid, Uuid, Vec<Space>) {
        let zone_a = Uuid::new_v4();
        let zone_b = Uuid::new_v4();
        let spaces = vec![
            space(zone_a, SpaceStatus::Available),
            space(zone_a, SpaceStatus::Occupied),
            space(zone_b, SpaceStatus::Available),
            space(zone_b, SpaceStatus::Occupied),
            space(zone_b, SpaceStatus::Maintenance),
        ];
        (zone_a, zone_b, spaces)
    }

    #[test]
    fn empty_filter_matches_everything() {
        let (_, _, spaces) = sample();
        assert_eq!(SpaceFilter::default().apply(&spaces).len(), spaces.len());
    }

    #[test]
    fn filtering_is_idempotent() {
        let (zone_a, _, spaces) = sample();
        let filter = SpaceFilter {
            zone: Some(zone_a),
            status: Some(SpaceStatus::Occupied),
        };
        let once = filter.apply(&spaces);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn combined_filter_is_the_intersection_of_single_filters() {
        let (_, zone_b, spaces) = sample();
        let combined = SpaceFilter {
            zone: Some(zone_b),
            status: Some(SpaceStatus::Occupied),
        }
        .apply(&spaces);

        let by_zone = SpaceFilter::by_zone(zone_b).apply(&spaces);
        let by_status = SpaceFilter::by_status(SpaceStatus::Occupied).apply(&spaces);
        let intersection: Vec<Space> = by_zone
            .iter()
            .filter(|s| by_status.iter().any(|t| t.id == s.id))
            .cloned()
            .collect();

        assert_eq!(combined, intersection);
        assert_eq!(combined.len(), 1);
    }

    #[test]
    fn empty_result_is_valid() {
        let (zone_a, _, spaces) = sample();
        let filter = SpaceFilter {
            zone: Some(zone_a),
            status: Some(SpaceStatus::Maintenance),
        };
        assert!(filter.apply(&spaces).is_empty());
    }

    #[test]
    fn zone_search_checks_name_and_description() {
        let zones = vec![
            Zone {
                id: Uuid::new_v4(),
                name: "North Wing".into(),
                description: Some("visitor parking".into()),
                capacity: 10,
                available_capacity: None,
                zone_type: ZoneType::External,
                is_active: true,
            },
            Zone {
                id: Uuid::new_v4(),
                name: "Basement".into(),
                description: None,
                capacity: 15,
                available_capacity: None,
                zone_type: ZoneType::Internal,
                is_active: true,
            },
        ];

        assert_eq!(search_zones(&zones, "north").len(), 1);
        assert_eq!(search_zones(&zones, "VISITOR").len(), 1);
        assert_eq!(search_zones(&zones, "base").len(), 1);
        assert!(search_zones(&zones, "rooftop").is_empty());
    }
}
