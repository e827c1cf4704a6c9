// ── Canonical domain types ──
//
// One typed schema for each entity. The wire-level naming drift between
// backend revisions is resolved in `convert` before values reach here.

mod space;
mod zone;

pub use space::{DEFAULT_PRIORITY, Space, SpaceDraft, SpaceStatus};
pub use zone::{Zone, ZoneDraft, ZoneType};
