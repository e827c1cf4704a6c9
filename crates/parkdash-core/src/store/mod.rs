// ── Per-view collection stores ──
//
// Whole-snapshot replacement with push-based change notification.

mod collection;
mod view_store;

pub use collection::Collection;
pub use view_store::ViewStore;
