// ── Space domain type ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Priority assigned when the backend or a draft doesn't specify one.
pub const DEFAULT_PRIORITY: u8 = 5;

/// Canonical 3-state space status. The reserved flag is orthogonal and
/// lives on [`Space`] directly — a space is never reserved while occupied.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum SpaceStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
}

/// An individual parking slot belonging to exactly one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    /// Server-assigned.
    pub id: Uuid,
    /// Human-readable code of the form `<Letter>-<3 digits>`, e.g. `A-001`.
    /// The server is authoritative; client-generated codes are suggestions.
    pub code: String,
    /// Foreign key to the owning zone (looked up at render time, not owned).
    pub zone_id: Uuid,
    pub status: SpaceStatus,
    /// May only be `true` while the space is `Available`.
    pub reserved: bool,
    /// 1..=10, visual indicator only.
    pub priority: u8,
}

/// Client-side space fields for create/update. Validated before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceDraft {
    pub code: String,
    pub zone_id: Uuid,
    pub status: SpaceStatus,
    pub reserved: bool,
    pub priority: u8,
}

impl SpaceDraft {
    /// Apply the status state machine: a reservation only survives while
    /// the space stays `Available`. Moving to `Occupied` or `Maintenance`
    /// clears the flag rather than erroring.
    pub fn sanitized(mut self) -> Self {
        if self.status != SpaceStatus::Available {
            self.reserved = false;
        }
        self
    }
}
