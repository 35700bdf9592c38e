//! Pure chart-model construction.
//!
//! Each strategy maps the full monthly series to a drawable model; none of
//! them filters records. Only the bar strategy looks at the threshold. An
//! empty input series yields an empty model, which draws as an empty chart.

use std::f64::consts::TAU;

use sd_data::{Month, MonthlyRecord};

use crate::kind::ChartKind;
use crate::palette::{BASE_BAR, EMPHASIS_BAR, Rgb, slice_color};

/// One bar of the bar strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSegment {
    pub month: Month,
    pub sales: f64,
    /// True when `sales >= threshold`.
    pub emphasized: bool,
}

impl BarSegment {
    /// One of exactly two fills, picked by the threshold comparison.
    pub fn fill(&self) -> Rgb {
        if self.emphasized { EMPHASIS_BAR } else { BASE_BAR }
    }
}

/// One slice of the pie strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub month: Month,
    pub sales: f64,
    /// Share of the year total, 0 when the total is not positive.
    pub fraction: f64,
    /// Radians, measured from twelve o'clock, increasing clockwise.
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Rgb,
}

/// Drawable chart, dispatched exhaustively on [`ChartKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChartModel {
    Bar {
        title: String,
        segments: Vec<BarSegment>,
    },
    Line {
        title: String,
        /// `[calendar position (1-based), sales]` pairs for one connected series.
        points: Vec<[f64; 2]>,
    },
    Pie {
        title: String,
        slices: Vec<PieSlice>,
    },
}

impl ChartModel {
    pub fn title(&self) -> &str {
        match self {
            ChartModel::Bar { title, .. }
            | ChartModel::Line { title, .. }
            | ChartModel::Pie { title, .. } => title,
        }
    }
}

/// Title shown above whichever chart is active.
pub fn chart_title(year: i32) -> String {
    format!("Sales Data - {year}")
}

/// Build the chart model for the selected strategy.
///
/// The line and pie strategies ignore the threshold entirely; that asymmetry
/// is part of the contract.
pub fn build_chart(
    kind: ChartKind,
    series: &[MonthlyRecord],
    title: impl Into<String>,
    threshold: f64,
) -> ChartModel {
    let title = title.into();
    match kind {
        ChartKind::Bar => ChartModel::Bar {
            title,
            segments: bar_segments(series, threshold),
        },
        ChartKind::Line => ChartModel::Line {
            title,
            points: line_points(series),
        },
        ChartKind::Pie => ChartModel::Pie {
            title,
            slices: pie_slices(series),
        },
    }
}

/// One segment per record; emphasis is the only effect the threshold has.
pub fn bar_segments(series: &[MonthlyRecord], threshold: f64) -> Vec<BarSegment> {
    series
        .iter()
        .map(|record| BarSegment {
            month: record.month,
            sales: record.sales,
            emphasized: record.sales >= threshold,
        })
        .collect()
}

/// One connected series across the months, x = 1-based calendar position.
pub fn line_points(series: &[MonthlyRecord]) -> Vec<[f64; 2]> {
    series
        .iter()
        .map(|record| [record.month.index() as f64 + 1.0, record.sales])
        .collect()
}

/// One slice per record, sized by its share of the year total, colored by
/// month position modulo the palette length.
pub fn pie_slices(series: &[MonthlyRecord]) -> Vec<PieSlice> {
    let total: f64 = series.iter().map(|r| r.sales).sum();
    let mut start_angle = -TAU / 4.0;

    series
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let fraction = if total > 0.0 { record.sales / total } else { 0.0 };
            let end_angle = start_angle + fraction * TAU;
            let slice = PieSlice {
                month: record.month,
                sales: record.sales,
                fraction,
                start_angle,
                end_angle,
                color: slice_color(index),
            };
            start_angle = end_angle;
            slice
        })
        .collect()
}
