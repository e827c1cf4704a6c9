// parkdash-core: Data layer between parkdash-api and consumers (CLI).

pub mod codegen;
pub mod convert;
pub mod error;
pub mod filter;
pub mod model;
pub mod session;
pub mod stats;
pub mod store;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use filter::SpaceFilter;
pub use session::{ConnectionState, Session, SessionConfig};
pub use store::ViewStore;

// Re-export model types at the crate root for ergonomics.
pub use model::{Space, SpaceDraft, SpaceStatus, Zone, ZoneDraft, ZoneType};
