//! Derived statistics over collection snapshots.
//!
//! Every function here is pure and synchronous: it takes a snapshot and
//! computes from scratch. There is no memoization — recomputing after any
//! mutation is the correctness contract, and the collections are small.

use serde::Serialize;
use uuid::Uuid;

use crate::model::{Space, SpaceStatus, Zone};

// ── Basic counts ────────────────────────────────────────────────────

pub fn total_count(spaces: &[Space]) -> usize {
    spaces.len()
}

pub fn count_by_status(spaces: &[Space], status: SpaceStatus) -> usize {
    spaces.iter().filter(|s| s.status == status).count()
}

fn count_in_zone(spaces: &[Space], zone_id: Uuid, status: SpaceStatus) -> usize {
    spaces
        .iter()
        .filter(|s| s.zone_id == zone_id && s.status == status)
        .count()
}

// ── Percentages & ratios ────────────────────────────────────────────

/// Share of occupied spaces among all spaces, rounded to whole percent.
/// `0` for an empty collection.
pub fn occupancy_percentage(spaces: &[Space]) -> u32 {
    percentage(
        count_by_status(spaces, SpaceStatus::Occupied),
        total_count(spaces),
    )
}

/// Rounded whole-percent share, `0` when the divisor is zero.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Occupied spaces in `zone` divided by the zone's capacity.
///
/// Falls back to the matching-space count as divisor when capacity is 0,
/// and to `0.0` when there are no matching spaces either.
pub fn zone_occupancy(zone: &Zone, spaces: &[Space]) -> f64 {
    let occupied = count_in_zone(spaces, zone.id, SpaceStatus::Occupied);
    let divisor = if zone.capacity > 0 {
        u64::from(zone.capacity)
    } else {
        occupied_fallback_divisor(spaces, zone.id)
    };
    ratio(occupied as u64, divisor)
}

fn occupied_fallback_divisor(spaces: &[Space], zone_id: Uuid) -> u64 {
    spaces.iter().filter(|s| s.zone_id == zone_id).count() as u64
}

/// Available capacity divided by total capacity, `0.0` when capacity is 0.
///
/// When the backend omitted `available_capacity` the zone is treated as
/// fully available — callers wanting the space-collection estimate should
/// go through [`crate::ViewStore::effective_available_capacity`].
pub fn availability_ratio(zone: &Zone) -> f64 {
    let available = zone.available_capacity.unwrap_or(zone.capacity);
    ratio(u64::from(available), u64::from(zone.capacity))
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}

// ── Severity tiering ────────────────────────────────────────────────

/// Badge tier for an availability ratio. Boundaries belong to the
/// higher tier: exactly 0.6 is High, exactly 0.3 is Medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyTier {
    High,
    Medium,
    Low,
}

impl OccupancyTier {
    pub fn from_ratio(r: f64) -> Self {
        if r >= 0.6 {
            Self::High
        } else if r >= 0.3 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// CSS-style severity class the original dashboard badges used.
    pub fn severity(self) -> &'static str {
        match self {
            Self::High => "success",
            Self::Medium => "warning",
            Self::Low => "danger",
        }
    }
}

// ── Aggregated views ────────────────────────────────────────────────

/// Status-distribution chart data: counts and whole-percent shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBreakdown {
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
    pub total: usize,
    pub available_percent: u32,
    pub occupied_percent: u32,
    pub maintenance_percent: u32,
}

pub fn status_breakdown(spaces: &[Space]) -> StatusBreakdown {
    let available = count_by_status(spaces, SpaceStatus::Available);
    let occupied = count_by_status(spaces, SpaceStatus::Occupied);
    let maintenance = count_by_status(spaces, SpaceStatus::Maintenance);
    let total = total_count(spaces);

    StatusBreakdown {
        available,
        occupied,
        maintenance,
        total,
        available_percent: percentage(available, total),
        occupied_percent: percentage(occupied, total),
        maintenance_percent: percentage(maintenance, total),
    }
}

/// One analytics-table row: per-zone counts and occupancy share among the
/// spaces actually assigned to the zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneAnalytics {
    pub zone_id: Uuid,
    pub name: String,
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
    pub total: usize,
    pub occupancy_percent: u32,
}

pub fn zone_analytics(zone: &Zone, spaces: &[Space]) -> ZoneAnalytics {
    let available = count_in_zone(spaces, zone.id, SpaceStatus::Available);
    let occupied = count_in_zone(spaces, zone.id, SpaceStatus::Occupied);
    let maintenance = count_in_zone(spaces, zone.id, SpaceStatus::Maintenance);
    let total = available + occupied + maintenance;

    ZoneAnalytics {
        zone_id: zone.id,
        name: zone.name.clone(),
        available,
        occupied,
        maintenance,
        total,
        occupancy_percent: percentage(occupied, total),
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

    fn spaces(zone_id: Uuid, occupied: usize, available: usize) -> Vec<Space> {
        let mut v = Vec::new();
        for _ in 0..occupied {
            v.push(space(zone_id, SpaceStatus::Occupied));
        }
        for _ in 0..available {
            v.push(space(zone_id, SpaceStatus::Available));
        }
        v
    }

    #[test]
    fn occupancy_percentage_is_zero_for_empty_collection() {
        assert_eq!(occupancy_percentage(&[]), 0);
    }

    #[test]
    fn occupancy_percentage_stays_within_bounds() {
        let zone_id = Uuid::new_v4();
        for occupied in 0..=10 {
            let s = spaces(zone_id, occupied, 10 - occupied);
            let p = occupancy_percentage(&s);
            assert!(p <= 100, "occupied={occupied} gave {p}");
        }
    }

    #[test]
    fn ten_spaces_four_occupied_is_forty_percent() {
        let z = zone(20, Some(12));
        let s = spaces(z.id, 4, 6);
        assert_eq!(occupancy_percentage(&s), 40);
    }

    #[test]
    fn zone_occupancy_divides_by_capacity() {
        let z = zone(20, None);
        let s = spaces(z.id, 4, 6);
        let r = zone_occupancy(&z, &s);
        assert!((r - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn zone_occupancy_falls_back_to_space_count_without_capacity() {
        let z = zone(0, None);
        let s = spaces(z.id, 4, 6);
        let r = zone_occupancy(&z, &s);
        assert!((r - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn zone_occupancy_of_empty_zone_is_zero() {
        let z = zone(0, None);
        assert!(zone_occupancy(&z, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn availability_ratio_handles_zero_capacity() {
        let z = zone(0, Some(0));
        assert!(availability_ratio(&z).abs() < f64::EPSILON);
    }

    #[test]
    fn availability_ratio_uses_reported_capacity() {
        let z = zone(20, Some(12));
        let r = availability_ratio(&z);
        assert!((r - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn tier_boundaries_belong_to_the_higher_tier() {
        assert_eq!(OccupancyTier::from_ratio(0.6), OccupancyTier::High);
        assert_eq!(OccupancyTier::from_ratio(0.599_999), OccupancyTier::Medium);
        assert_eq!(OccupancyTier::from_ratio(0.3), OccupancyTier::Medium);
        assert_eq!(OccupancyTier::from_ratio(0.299_999), OccupancyTier::Low);
    }

    #[test]
    fn tier_severity_matches_badge_classes() {
        assert_eq!(OccupancyTier::High.severity(), "success");
        assert_eq!(OccupancyTier::Medium.severity(), "warning");
        assert_eq!(OccupancyTier::Low.severity(), "danger");
    }

    #[test]
    fn status_breakdown_percentages_cover_all_states() {
        let zone_id = Uuid::new_v4();
        let mut s = spaces(zone_id, 2, 6);
        s.push(space(zone_id, SpaceStatus::Maintenance));
        s.push(space(zone_id, SpaceStatus::Maintenance));

        let b = status_breakdown(&s);
        assert_eq!(b.total, 10);
        assert_eq!(b.available, 6);
        assert_eq!(b.occupied, 2);
        assert_eq!(b.maintenance, 2);
        assert_eq!(b.available_percent, 60);
        assert_eq!(b.occupied_percent, 20);
        assert_eq!(b.maintenance_percent, 20);
    }

    #[test]
    fn zone_analytics_only_counts_matching_spaces() {
        let z = zone(20, None);
        let mut s = spaces(z.id, 3, 5);
        // Spaces from another zone must not bleed in.
        s.extend(spaces(Uuid::new_v4(), 7, 0));

        let row = zone_analytics(&z, &s);
        assert_eq!(row.total, 8);
        assert_eq!(row.occupied, 3);
        assert_eq!(row.occupancy_percent, 38); // round(3/8 * 100)
    }

    #[test]
    fn recomputation_matches_from_scratch_results() {
        let zone_id = Uuid::new_v4();
        let mut s = spaces(zone_id, 4, 6);
        let before = occupancy_percentage(&s);
        s.push(space(zone_id, SpaceStatus::Occupied));
        s.pop();
        assert_eq!(occupancy_percentage(&s), before);
    }
}
