//! Control surface: year buttons, chart-kind buttons, threshold input.
//!
//! The view owns only the raw threshold text; every interaction is reported
//! back as an action for the reducer rather than mutating state here.

use sd_charts::ChartKind;
use sd_data::AnnualSalesTable;
use sd_state::{Action, DashboardState};

pub struct ControlsView {
    /// What the user typed, verbatim; coercion happens in the reducer.
    threshold_text: String,
}

impl ControlsView {
    pub fn new(state: &DashboardState) -> Self {
        Self {
            threshold_text: state.threshold.to_string(),
        }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &DashboardState,
        table: &AnnualSalesTable,
    ) -> Vec<Action> {
        let mut actions = Vec::new();

        ui.vertical_centered(|ui| {
            ui.heading("Sales Performance Dashboard");
            ui.label("Interactive visualization of mock sales data for 2022, 2023, and 2024.");
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Select Year:");
            for year in table.years() {
                if ui
                    .selectable_label(state.year == year, year.to_string())
                    .clicked()
                {
                    actions.push(Action::SelectYear(year));
                }
            }

            ui.separator();

            ui.label("Select Chart:");
            for kind in ChartKind::ALL {
                if ui
                    .selectable_label(state.chart_kind == kind, kind.label())
                    .clicked()
                {
                    actions.push(Action::SelectChart(kind));
                }
            }

            ui.separator();

            ui.label("Sales Threshold:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.threshold_text)
                    .desired_width(90.0)
                    .hint_text("e.g., 10000"),
            );
            if response.changed() {
                actions.push(Action::SetThreshold(self.threshold_text.clone()));
            }
            // Decorative unit label; no conversion happens anywhere.
            ui.label("USD");
        });

        actions
    }
}
