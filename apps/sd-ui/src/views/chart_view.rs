//! Chart rendering: egui_plot for bar and line, painter fan-fill for pie.

use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use egui::{Color32, Pos2, Sense, Stroke, Vec2};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};
use sd_charts::{BarSegment, ChartModel, LINE_STROKE, PieSlice, Rgb};
use sd_data::Month;

#[derive(Default)]
pub struct ChartView;

impl ChartView {
    pub fn show(&mut self, ui: &mut egui::Ui, model: &ChartModel) {
        ui.heading(model.title());
        ui.separator();

        match model {
            ChartModel::Bar { segments, .. } => self.show_bar(ui, segments),
            ChartModel::Line { points, .. } => self.show_line(ui, points),
            ChartModel::Pie { slices, .. } => self.show_pie(ui, slices),
        }
    }

    fn show_bar(&self, ui: &mut egui::Ui, segments: &[BarSegment]) {
        let bars: Vec<Bar> = segments
            .iter()
            .map(|segment| {
                Bar::new(segment.month.index() as f64 + 1.0, segment.sales)
                    .width(0.6)
                    .name(segment.month.label())
                    .fill(to_color32(segment.fill()))
            })
            .collect();

        Plot::new("sales_bar")
            .legend(Legend::default())
            .x_axis_formatter(month_axis_label)
            .y_axis_label("Total Sales (USD)")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name("Total Sales"));
            });
    }

    fn show_line(&self, ui: &mut egui::Ui, points: &[[f64; 2]]) {
        let plot_points: PlotPoints = points.to_vec().into();
        let line = Line::new(plot_points)
            .name("Total Sales")
            .color(to_color32(LINE_STROKE))
            .width(2.0);

        Plot::new("sales_line")
            .legend(Legend::default())
            .x_axis_formatter(month_axis_label)
            .y_axis_label("Total Sales (USD)")
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }

    fn show_pie(&self, ui: &mut egui::Ui, slices: &[PieSlice]) {
        ui.horizontal(|ui| {
            let size = ui.available_height().clamp(160.0, 320.0);
            let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
            let rect = response.rect;
            let center = rect.center();
            let radius = rect.width().min(rect.height()) * 0.45;

            for slice in slices {
                paint_slice(&painter, center, radius, slice);
            }

            ui.vertical(|ui| {
                for slice in slices {
                    ui.horizontal(|ui| {
                        let (swatch, swatch_painter) =
                            ui.allocate_painter(Vec2::splat(12.0), Sense::hover());
                        swatch_painter.rect_filled(swatch.rect, 2.0, to_color32(slice.color));
                        ui.label(format!(
                            "{}: {:.0} ({:.1}%)",
                            slice.month,
                            slice.sales,
                            slice.fraction * 100.0
                        ));
                    });
                }
            });
        });
    }
}

fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Tick label for the month axis: integral positions 1..=12 get the fixed
/// three-letter label, everything else stays blank.
fn month_axis_label(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    let pos = mark.value;
    if !(1.0..=12.0).contains(&pos) || pos.fract() != 0.0 {
        return String::new();
    }
    Month::from_index(pos as usize - 1)
        .map(|month| month.label().to_string())
        .unwrap_or_default()
}

/// Fill one slice as a triangle fan around the center. Step count scales
/// with the sweep so the arc stays smooth at any slice size.
fn paint_slice(painter: &egui::Painter, center: Pos2, radius: f32, slice: &PieSlice) {
    let sweep = slice.end_angle - slice.start_angle;
    if sweep <= 0.0 {
        return;
    }

    let steps = ((sweep / TAU) * 96.0).ceil().max(1.0) as usize;
    let color = to_color32(slice.color);
    let point_at =
        |angle: f64| center + Vec2::new(angle.cos() as f32, angle.sin() as f32) * radius;

    let mut prev = point_at(slice.start_angle);
    for step in 1..=steps {
        let angle = slice.start_angle + sweep * step as f64 / steps as f64;
        let next = point_at(angle);
        painter.add(egui::Shape::convex_polygon(
            vec![center, prev, next],
            color,
            Stroke::NONE,
        ));
        prev = next;
    }
}
