//! sd-charts: the dashboard's three interchangeable chart strategies.
//!
//! Contains:
//! - kind (closed chart-kind enum: Bar, Line, Pie)
//! - palette (fixed fill colors shared by all strategies)
//! - model (pure chart-model construction from a monthly series)
//!
//! Everything here is UI-toolkit-agnostic: the models carry months, values,
//! angles and RGB triples, and the app layer decides how to paint them.

pub mod kind;
pub mod model;
pub mod palette;

pub use kind::ChartKind;
pub use model::{BarSegment, ChartModel, PieSlice, build_chart, chart_title};
pub use palette::{BASE_BAR, EMPHASIS_BAR, LINE_STROKE, PALETTE, Rgb, slice_color};
