//! sd-state: selection state driving the dashboard.
//!
//! Contains:
//! - selection (immutable state snapshot, actions, pure reducer,
//!   threshold parse policy)
//! - derive (memoized derived series, keyed on year)
//! - latch (one-shot readiness gate for the rendering surface)

pub mod derive;
pub mod latch;
pub mod selection;

pub use derive::SeriesCache;
pub use latch::ReadyLatch;
pub use selection::{Action, DashboardState, DEFAULT_THRESHOLD, parse_threshold, reduce};
