//! Static Chart Renderer
//! Draws the configured bar chart into an RGB pixel buffer with plotters.
//!
//! Layout:
//! 1. Title centered above the plot area
//! 2. One bar per group at x = 0..n-1 with symmetric error whiskers
//! 3. One bracket + label per significant pair, stacked top-down
//! 4. Axis titles and tick labels at the configured font sizes

use crate::chart::layout::{self, BracketPlacement, LayoutError, SIGNIFICANCE_LABEL};
use crate::chart::params::ChartParams;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

/// Figure units to pixels. A 8x6 figure renders at 800x600.
pub const PIXELS_PER_UNIT: f64 = 100.0;
/// Font sizes are given in points; the canvas is 100 DPI.
const PX_PER_POINT: f64 = PIXELS_PER_UNIT / 72.0;
/// Bar half-width in x-axis units.
const BAR_HALF_WIDTH: f64 = 0.35;
/// Error whisker cap half-width in pixels.
const WHISKER_CAP_PX: u32 = 5;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("drawing failed: {0}")]
    Draw(String),
}

/// Renders a `ChartParams` into pixels. Stateless; each call owns its
/// buffer and the caller decides what to do with it.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Canvas size in pixels for the configured figure size.
    pub fn canvas_size(params: &ChartParams) -> (u32, u32) {
        (
            (params.fig_width * PIXELS_PER_UNIT).round() as u32,
            (params.fig_height * PIXELS_PER_UNIT).round() as u32,
        )
    }

    /// Y-axis range covering zero, every whisker extent, and every bracket
    /// with label headroom. Never inverted or empty.
    pub fn value_range(params: &ChartParams, placements: &[BracketPlacement]) -> (f64, f64) {
        let mut low = 0.0f64;
        let mut high = 0.0f64;
        for group in &params.groups {
            low = low.min(group.mean - group.std_error);
            high = high.max(group.mean + group.std_error);
        }
        for placement in placements {
            high = high.max(placement.y + placement.height);
        }
        let pad = (high - low).max(1.0) * 0.08;
        let low = if low < 0.0 { low - pad } else { 0.0 };
        (low, high + pad)
    }

    /// Render the full chart and return the raw RGB888 buffer with its
    /// pixel dimensions.
    pub fn render_rgb(params: &ChartParams) -> Result<(Vec<u8>, u32, u32), RenderError> {
        let placements =
            layout::layout_brackets(&params.means(), &params.std_errors(), params.pairs())?;

        let (width, height) = Self::canvas_size(params);
        let mut buffer = vec![0u8; (width as usize) * (height as usize) * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw(&root, params, &placements)?;
            root.present().map_err(draw_err)?;
        }
        Ok((buffer, width, height))
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, plotters::coord::Shift>,
        params: &ChartParams,
        placements: &[BracketPlacement],
    ) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let n = params.groups.len();
        let (y_min, y_max) = Self::value_range(params, placements);
        let x_range = -0.6..(n as f64 - 0.4);

        let title_px = params.title_font_size as f64 * PX_PER_POINT;
        let label_px = params.label_font_size as f64 * PX_PER_POINT;
        let tick_px = params.tick_font_size as f64 * PX_PER_POINT;
        let axis_num_px = params.axis_num_font_size as f64 * PX_PER_POINT;
        let stroke = stroke_px(params.line_width);

        let (r, g, b) = params.bar_color.rgb();
        let fill = RGBColor(r, g, b).mix(0.7);

        let mut chart = ChartBuilder::on(root)
            .caption(&params.title, ("sans-serif", title_px))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, y_min..y_max)
            .map_err(draw_err)?;

        let names = params.group_names();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .axis_style(BLACK.stroke_width(stroke))
            .x_labels(2 * n + 2)
            .x_label_formatter(&|x| {
                let index = x.round();
                if (x - index).abs() < 1e-6 && index >= 0.0 && (index as usize) < names.len() {
                    names[index as usize].clone()
                } else {
                    String::new()
                }
            })
            .x_label_style(("sans-serif", tick_px))
            .y_label_style(("sans-serif", axis_num_px))
            .x_desc(params.x_label.as_str())
            .y_desc(params.y_label.as_str())
            .axis_desc_style(("sans-serif", label_px))
            .draw()
            .map_err(draw_err)?;

        // Bars, filled then outlined
        chart
            .draw_series(params.groups.iter().enumerate().map(|(i, group)| {
                let x = i as f64;
                Rectangle::new(
                    [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, group.mean)],
                    fill.filled(),
                )
            }))
            .map_err(draw_err)?;
        chart
            .draw_series(params.groups.iter().enumerate().map(|(i, group)| {
                let x = i as f64;
                Rectangle::new(
                    [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, group.mean)],
                    BLACK.stroke_width(stroke),
                )
            }))
            .map_err(draw_err)?;

        // Symmetric error whiskers with fixed-width caps
        chart
            .draw_series(params.groups.iter().enumerate().map(|(i, group)| {
                ErrorBar::new_vertical(
                    i as f64,
                    group.mean - group.std_error,
                    group.mean,
                    group.mean + group.std_error,
                    BLACK.stroke_width(stroke),
                    WHISKER_CAP_PX,
                )
            }))
            .map_err(draw_err)?;

        // Significance brackets with centered labels
        let label_style = ("sans-serif", tick_px)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        for placement in placements {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    placement.polyline().to_vec(),
                    BLACK.stroke_width(stroke),
                )))
                .map_err(draw_err)?;
            chart
                .draw_series(std::iter::once(Text::new(
                    SIGNIFICANCE_LABEL,
                    placement.label_anchor(),
                    label_style.clone(),
                )))
                .map_err(draw_err)?;
        }

        Ok(())
    }
}

fn draw_err<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Draw(err.to_string())
}

/// Plotters strokes are whole pixels. The configured width is fractional
/// (0.1 steps), so round up; 0.5..=1.0 stays 1 px and 1.1 already reads
/// heavier instead of collapsing everything below 1.5 together.
fn stroke_px(line_width: f64) -> u32 {
    line_width.ceil().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::layout::layout_brackets;

    #[test]
    fn canvas_size_maps_figure_units_to_pixels() {
        let params = ChartParams::default();
        assert_eq!(ChartRenderer::canvas_size(&params), (800, 600));

        let mut wide = ChartParams::default();
        wide.fig_width = 20.0;
        wide.fig_height = 3.0;
        assert_eq!(ChartRenderer::canvas_size(&wide), (2000, 300));
    }

    #[test]
    fn value_range_covers_whiskers_and_brackets() {
        let mut params = ChartParams::default();
        params.groups[0].mean = 1.0;
        params.groups[1].mean = 2.0;
        params.groups[2].mean = 3.0;
        for group in &mut params.groups {
            group.std_error = 0.1;
        }
        params.set_pair(0, 2, true);

        let placements =
            layout_brackets(&params.means(), &params.std_errors(), params.pairs()).unwrap();
        let (low, high) = ChartRenderer::value_range(&params, &placements);
        assert_eq!(low, 0.0);
        // topmost bracket sits at y=3.3 with height 0.2
        assert!(high > 3.5);
    }

    #[test]
    fn value_range_extends_below_zero_for_negative_means() {
        let mut params = ChartParams::default();
        for group in &mut params.groups {
            group.mean = -2.0;
            group.std_error = 0.5;
        }

        let (low, high) = ChartRenderer::value_range(&params, &[]);
        assert!(low < -2.5);
        // bars are drawn from 0, so the baseline must stay inside the range
        assert!(high >= 0.0);
    }

    #[test]
    fn value_range_is_never_empty_for_flat_input() {
        let params = ChartParams::default(); // all means and errors zero
        let (low, high) = ChartRenderer::value_range(&params, &[]);
        assert_eq!(low, 0.0);
        assert!(high > 0.0);
    }

    #[test]
    fn renders_default_parameters_to_full_canvas() {
        let (rgb, width, height) = ChartRenderer::render_rgb(&ChartParams::default()).unwrap();
        assert_eq!((width, height), (800, 600));
        assert_eq!(rgb.len(), (width as usize) * (height as usize) * 3);
    }

    #[test]
    fn renders_brackets_for_marked_pairs() {
        let mut params = ChartParams::default();
        params.groups[0].mean = 1.0;
        params.groups[1].mean = 2.0;
        params.groups[2].mean = 3.0;
        for group in &mut params.groups {
            group.std_error = 0.1;
        }
        params.set_pair(0, 2, true);
        params.set_pair(0, 1, true);

        let (rgb, width, height) = ChartRenderer::render_rgb(&params).unwrap();
        assert_eq!(rgb.len(), (width as usize) * (height as usize) * 3);
    }

    #[test]
    fn stroke_width_rounds_up_to_whole_pixels() {
        assert_eq!(stroke_px(0.5), 1);
        assert_eq!(stroke_px(1.0), 1);
        assert_eq!(stroke_px(1.1), 2);
        assert_eq!(stroke_px(1.5), 2);
        assert_eq!(stroke_px(5.0), 5);
    }
}
