//! Chart Preview Widget
//! Central panel with a live interactive preview of the configured chart
//! using egui_plot. The PNG export redraws the same geometry statically.

use crate::chart::{layout_brackets, ChartParams, SIGNIFICANCE_LABEL};
use egui::{Color32, RichText, Stroke};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoint, PlotPoints, Text};

/// Error whisker cap half-width in x-axis units.
const CAP_HALF_WIDTH: f64 = 0.1;

/// Live preview of the current parameters. Stateless; redraws from scratch
/// each frame.
pub struct ChartPreview;

impl ChartPreview {
    pub fn show(ui: &mut egui::Ui, params: &ChartParams) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new(&params.title)
                    .size(params.title_font_size as f32)
                    .strong(),
            );
        });
        ui.add_space(5.0);

        // The panel only produces valid pairs, so this cannot fail from
        // interactive use; a failure just drops the brackets from the frame.
        let placements =
            match layout_brackets(&params.means(), &params.std_errors(), params.pairs()) {
                Ok(placements) => placements,
                Err(err) => {
                    log::warn!("bracket layout failed: {err}");
                    Vec::new()
                }
            };

        let names = params.group_names();
        let fill = params.bar_color.color32();
        let stroke_width = params.line_width as f32;
        let tick_size = params.tick_font_size as f32;

        Plot::new("chart_preview")
            .x_axis_label(params.x_label.clone())
            .y_axis_label(params.y_label.clone())
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                let index = mark.value.round();
                if (mark.value - index).abs() < 0.05
                    && index >= 0.0
                    && (index as usize) < names.len()
                {
                    names[index as usize].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                let bars: Vec<Bar> = params
                    .groups
                    .iter()
                    .enumerate()
                    .map(|(i, group)| {
                        Bar::new(i as f64, group.mean)
                            .width(0.7)
                            .fill(fill.gamma_multiply(0.7))
                            .stroke(Stroke::new(stroke_width, Color32::BLACK))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));

                // Error whiskers with caps
                for (i, group) in params.groups.iter().enumerate() {
                    let x = i as f64;
                    let low = group.mean - group.std_error;
                    let high = group.mean + group.std_error;
                    plot_ui.line(
                        Line::new(PlotPoints::from(vec![[x, low], [x, high]]))
                            .color(Color32::BLACK)
                            .width(stroke_width),
                    );
                    for cap_y in [low, high] {
                        plot_ui.line(
                            Line::new(PlotPoints::from(vec![
                                [x - CAP_HALF_WIDTH, cap_y],
                                [x + CAP_HALF_WIDTH, cap_y],
                            ]))
                            .color(Color32::BLACK)
                            .width(stroke_width),
                        );
                    }
                }

                // Significance brackets with labels
                for placement in &placements {
                    let points: PlotPoints = placement
                        .polyline()
                        .iter()
                        .map(|&(x, y)| [x, y])
                        .collect();
                    plot_ui.line(
                        Line::new(points)
                            .color(Color32::BLACK)
                            .width(stroke_width),
                    );
                    let (x, y) = placement.label_anchor();
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x, y),
                            RichText::new(SIGNIFICANCE_LABEL).size(tick_size),
                        )
                        .anchor(egui::Align2::CENTER_BOTTOM)
                        .color(Color32::BLACK),
                    );
                }
            });
    }
}
