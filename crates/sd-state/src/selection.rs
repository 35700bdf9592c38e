//! Selection state and its reducer.
//!
//! The three fields are independent: no action touches more than one of
//! them, there is no sequencing between actions, and repeating an action is
//! a no-op. The state is replaced wholesale on each action instead of being
//! mutated in place, which keeps the whole state machine testable without a
//! rendering layer.

use sd_charts::ChartKind;
use sd_data::AnnualSalesTable;
use tracing::debug;

/// Threshold shown when the dashboard starts.
pub const DEFAULT_THRESHOLD: f64 = 10_000.0;

/// Immutable snapshot of the user's selections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardState {
    /// Any integer is representable; years outside the table degrade to an
    /// empty series at lookup time.
    pub year: i32,
    pub chart_kind: ChartKind,
    /// Any real value, negatives included. No clamping.
    pub threshold: f64,
}

impl DashboardState {
    /// Defaults at view mount: latest table year, bar chart, 10000.
    pub fn initial(table: &AnnualSalesTable) -> Self {
        Self {
            year: table.latest_year().unwrap_or_default(),
            chart_kind: ChartKind::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// A discrete user interaction with the control surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectYear(i32),
    SelectChart(ChartKind),
    /// Raw text from the threshold input, parsed by [`parse_threshold`].
    SetThreshold(String),
}

/// Pure reducer: `(state, action) -> state'`.
pub fn reduce(state: &DashboardState, action: &Action) -> DashboardState {
    let next = match action {
        Action::SelectYear(year) => DashboardState {
            year: *year,
            ..*state
        },
        Action::SelectChart(kind) => DashboardState {
            chart_kind: *kind,
            ..*state
        },
        Action::SetThreshold(raw) => DashboardState {
            threshold: parse_threshold(raw),
            ..*state
        },
    };
    debug!(?action, ?next, "selection updated");
    next
}

/// Coerce raw threshold text to a number.
///
/// Input that fails to parse, and NaN, both count as zero; the previous
/// value is never preserved and the input is never rejected. Negative
/// values pass through unclamped.
pub fn parse_threshold(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_state() -> DashboardState {
        DashboardState::initial(&AnnualSalesTable::builtin())
    }

    #[test]
    fn initial_state_uses_latest_year_bar_and_default_threshold() {
        let state = default_state();
        assert_eq!(state.year, 2024);
        assert_eq!(state.chart_kind, ChartKind::Bar);
        assert_eq!(state.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn parse_threshold_policy() {
        assert_eq!(parse_threshold("abc"), 0.0);
        assert_eq!(parse_threshold("12345"), 12345.0);
        assert_eq!(parse_threshold("-5"), -5.0);
        assert_eq!(parse_threshold(""), 0.0);
        assert_eq!(parse_threshold("  42.5 "), 42.5);
        assert_eq!(parse_threshold("NaN"), 0.0);
    }

    #[test]
    fn select_year_accepts_any_integer() {
        let state = reduce(&default_state(), &Action::SelectYear(1999));
        assert_eq!(state.year, 1999);
    }

    #[test]
    fn year_selection_is_last_write_wins() {
        let state = default_state();
        let state = reduce(&state, &Action::SelectYear(2024));
        let state = reduce(&state, &Action::SelectYear(2023));
        assert_eq!(state.year, 2023);
    }

    #[test]
    fn actions_are_idempotent() {
        let state = default_state();
        let once = reduce(&state, &Action::SelectChart(ChartKind::Pie));
        let twice = reduce(&once, &Action::SelectChart(ChartKind::Pie));
        assert_eq!(once, twice);
    }

    #[test]
    fn fields_are_independent() {
        let state = default_state();

        let after_kind = reduce(&state, &Action::SelectChart(ChartKind::Line));
        assert_eq!(after_kind.year, state.year);
        assert_eq!(after_kind.threshold, state.threshold);

        let after_year = reduce(&state, &Action::SelectYear(2022));
        assert_eq!(after_year.chart_kind, state.chart_kind);
        assert_eq!(after_year.threshold, state.threshold);

        let after_threshold = reduce(&state, &Action::SetThreshold("7".into()));
        assert_eq!(after_threshold.year, state.year);
        assert_eq!(after_threshold.chart_kind, state.chart_kind);
    }

    proptest! {
        #[test]
        fn select_year_never_touches_other_fields(year in any::<i32>()) {
            let state = default_state();
            let next = reduce(&state, &Action::SelectYear(year));
            prop_assert_eq!(next.year, year);
            prop_assert_eq!(next.chart_kind, state.chart_kind);
            prop_assert_eq!(next.threshold, state.threshold);
        }

        #[test]
        fn set_threshold_never_touches_other_fields(raw in "\\PC*") {
            let state = default_state();
            let next = reduce(&state, &Action::SetThreshold(raw));
            prop_assert_eq!(next.year, state.year);
            prop_assert_eq!(next.chart_kind, state.chart_kind);
            prop_assert!(!next.threshold.is_nan());
        }

        #[test]
        fn numeric_text_parses_exactly(value in -1e9..1e9f64) {
            let text = format!("{value}");
            prop_assert_eq!(parse_threshold(&text), value);
        }

        #[test]
        fn distinct_field_actions_commute(year in any::<i32>(), raw in "[0-9]{1,6}") {
            let state = default_state();
            let year_action = Action::SelectYear(year);
            let threshold_action = Action::SetThreshold(raw);
            let a = reduce(&reduce(&state, &year_action), &threshold_action);
            let b = reduce(&reduce(&state, &threshold_action), &year_action);
            prop_assert_eq!(a, b);
        }
    }
}
