use std::collections::BTreeMap;
use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points, Polygon};

use crate::chart::{PieSpec, ScatterSpec};
use crate::color::{self, ColorMap};

// ---------------------------------------------------------------------------
// Proportion (pie) chart
// ---------------------------------------------------------------------------

/// Draw a pie spec as filled polygon slices on a unit circle.
pub fn proportion_chart(ui: &mut Ui, spec: &PieSpec, height: f32) {
    ui.label(RichText::new(&spec.title).strong());

    let total: f64 = spec.slices.iter().map(|s| s.value).sum();
    let palette = color::generate_palette(spec.slices.len());

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            if total <= 0.0 {
                // Empty derived table: render no slices at all.
                return;
            }

            // Slices start at 12 o'clock and run clockwise.
            let mut start = 0.25 * TAU;
            for (slice, fill) in spec.slices.iter().zip(palette) {
                let span = slice.value / total * TAU;
                if span <= 0.0 {
                    continue;
                }
                let polygon = Polygon::new(pie_slice_points(start, span))
                    .name(format!("{} ({})", slice.label, slice.value))
                    .fill_color(fill)
                    .stroke(Stroke::new(1.0, Color32::WHITE));
                plot_ui.polygon(polygon);
                start -= span;
            }
        });
}

/// Points of one pie slice: the circle centre plus an arc of `span` radians
/// running clockwise from `start`.
fn pie_slice_points(start: f64, span: f64) -> PlotPoints<'static> {
    let steps = ((span / 0.02).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start - span * (i as f64 / steps as f64);
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::from(points)
}

// ---------------------------------------------------------------------------
// Payload-vs-outcome scatter chart
// ---------------------------------------------------------------------------

/// Draw a scatter spec, one point series per booster-version category.
pub fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec, colors: &ColorMap, height: f32) {
    ui.label(RichText::new(&spec.title).strong());

    let mut groups: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for point in &spec.points {
        groups
            .entry(point.group.as_str())
            .or_default()
            .push([point.payload, point.class]);
    }

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .height(height)
        .x_axis_label(&spec.x_label)
        .y_axis_label(&spec.y_label)
        .include_y(-0.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for (group, coords) in groups {
                let points = Points::new(PlotPoints::from(coords))
                    .name(group)
                    .color(colors.color_for(group))
                    .radius(3.0);
                plot_ui.points(points);
            }
        });
}
