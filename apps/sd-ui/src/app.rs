use crate::views::{ChartView, ControlsView};
use sd_charts::{build_chart, chart_title};
use sd_data::AnnualSalesTable;
use sd_state::{DashboardState, ReadyLatch, SeriesCache, reduce};

pub struct SalesDashApp {
    table: AnnualSalesTable,
    state: DashboardState,
    series_cache: SeriesCache,
    ready: ReadyLatch,
    controls_view: ControlsView,
    chart_view: ChartView,
}

impl SalesDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let table = AnnualSalesTable::builtin();
        let state = DashboardState::initial(&table);
        tracing::info!(year = state.year, "dashboard started");

        Self {
            controls_view: ControlsView::new(&state),
            chart_view: ChartView::default(),
            series_cache: SeriesCache::default(),
            ready: ReadyLatch::default(),
            table,
            state,
        }
    }
}

impl eframe::App for SalesDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let actions = egui::TopBottomPanel::top("controls")
            .show(ctx, |ui| {
                self.controls_view.show(ui, &self.state, &self.table)
            })
            .inner;

        for action in &actions {
            self.state = reduce(&self.state, action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.ready.is_ready() {
                // Surface not confirmed until one full frame has run.
                ui.centered_and_justified(|ui| {
                    ui.horizontal(|ui| {
                        ui.add(egui::Spinner::new());
                        ui.label("Loading chart...");
                    });
                });
                self.ready.mark_ready();
                ctx.request_repaint();
                return;
            }

            let series = self.series_cache.series(&self.table, self.state.year);
            let model = build_chart(
                self.state.chart_kind,
                series,
                chart_title(self.state.year),
                self.state.threshold,
            );
            self.chart_view.show(ui, &model);

            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.weak(
                    "This dashboard uses mock data. Future versions could integrate \
                     with a real API to fetch live sales data.",
                );
            });
        });
    }
}
