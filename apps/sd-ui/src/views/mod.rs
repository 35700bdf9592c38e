pub mod chart_view;
pub mod controls_view;

pub use chart_view::ChartView;
pub use controls_view::ControlsView;
