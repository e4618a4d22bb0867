use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot, PlotPoints, Points};

use crate::chart::{ChartKind, ChartSpec};
use crate::color::CategoryColors;
use crate::data::model::Table;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 340.0;

// ---------------------------------------------------------------------------
// Chart panel (central panel)
// ---------------------------------------------------------------------------

/// Render the auto-selected chart for the current axis columns.
pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    let (Some(table), Some(spec)) = (&state.table, &state.chart) else {
        return;
    };

    ui.heading(&spec.title);
    match spec.kind {
        ChartKind::Scatter => scatter_plot(ui, table, spec),
        ChartKind::Bar => bar_plot(ui, table, spec),
        ChartKind::Histogram => histogram_plot(ui, table, spec),
    }
}

// ---------------------------------------------------------------------------
// Scatter: both columns numeric
// ---------------------------------------------------------------------------

fn scatter_plot(ui: &mut Ui, table: &Table, spec: &ChartSpec) {
    let y_name = spec.y.as_deref().unwrap_or(&spec.x);
    let points: PlotPoints = numeric_pairs(table, &spec.x, y_name)
        .into_iter()
        .map(|(x, y)| [x, y])
        .collect();

    Plot::new("explorer_chart")
        .height(CHART_HEIGHT)
        .x_axis_label(&spec.x)
        .y_axis_label(y_name)
        .legend(egui_plot::Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .name(y_name)
                    .color(Color32::LIGHT_BLUE)
                    .radius(3.0),
            );
        });
}

/// Row-wise (x, y) pairs where both cells are numeric and present.
fn numeric_pairs(table: &Table, x: &str, y: &str) -> Vec<(f64, f64)> {
    let (Some(xs), Some(ys)) = (table.column(x), table.column(y)) else {
        return Vec::new();
    };
    xs.values
        .iter()
        .zip(ys.values.iter())
        .filter_map(|(xv, yv)| Some((xv.as_f64()?, yv.as_f64()?)))
        .collect()
}

// ---------------------------------------------------------------------------
// Bar: numeric y over (usually categorical) x
// ---------------------------------------------------------------------------

fn bar_plot(ui: &mut Ui, table: &Table, spec: &ChartSpec) {
    let y_name = spec.y.as_deref().unwrap_or(&spec.x);
    let sums = category_sums(table, &spec.x, y_name);
    let labels: Vec<String> = sums.iter().map(|(label, _)| label.clone()).collect();
    let colors = CategoryColors::new(&labels);

    let bars: Vec<Bar> = sums
        .iter()
        .enumerate()
        .map(|(i, (label, total))| {
            Bar::new(i as f64, *total)
                .name(label)
                .fill(colors.color_for(label))
                .width(0.7)
        })
        .collect();

    Plot::new("explorer_chart")
        .height(CHART_HEIGHT)
        .x_axis_formatter(category_axis_formatter(labels))
        .x_axis_label(&spec.x)
        .y_axis_label(y_name)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(y_name));
        });
}

/// Sum of y per distinct x label, in first-appearance order. Rows with a
/// missing cell on either axis are skipped.
fn category_sums(table: &Table, x: &str, y: &str) -> Vec<(String, f64)> {
    let (Some(xs), Some(ys)) = (table.column(x), table.column(y)) else {
        return Vec::new();
    };

    let mut sums: Vec<(String, f64)> = Vec::new();
    for (xv, yv) in xs.values.iter().zip(ys.values.iter()) {
        if xv.is_missing() {
            continue;
        }
        let Some(value) = yv.as_f64() else { continue };
        let label = xv.to_string();
        match sums.iter_mut().find(|(l, _)| *l == label) {
            Some((_, total)) => *total += value,
            None => sums.push((label, value)),
        }
    }
    sums
}

// ---------------------------------------------------------------------------
// Histogram: distribution of x alone
// ---------------------------------------------------------------------------

fn histogram_plot(ui: &mut Ui, table: &Table, spec: &ChartSpec) {
    if table.is_numeric(&spec.x) {
        numeric_histogram(ui, table, spec);
    } else {
        category_histogram(ui, table, spec);
    }
}

/// Binned histogram for a numeric x column.
fn numeric_histogram(ui: &mut Ui, table: &Table, spec: &ChartSpec) {
    let values = table.numeric_values(&spec.x);
    let bars: Vec<Bar> = bin_numeric(&values)
        .into_iter()
        .map(|bin| {
            Bar::new(bin.center, bin.count as f64)
                .width(bin.width)
                .fill(Color32::LIGHT_BLUE)
        })
        .collect();

    Plot::new("explorer_chart")
        .height(CHART_HEIGHT)
        .x_axis_label(&spec.x)
        .y_axis_label("count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(&spec.x));
        });
}

/// Count-per-category histogram for a text x column.
fn category_histogram(ui: &mut Ui, table: &Table, spec: &ChartSpec) {
    let counts = category_counts(table, &spec.x);
    let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
    let colors = CategoryColors::new(&labels);

    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            Bar::new(i as f64, *count as f64)
                .name(label)
                .fill(colors.color_for(label))
                .width(0.7)
        })
        .collect();

    Plot::new("explorer_chart")
        .height(CHART_HEIGHT)
        .x_axis_formatter(category_axis_formatter(labels))
        .x_axis_label(&spec.x)
        .y_axis_label("count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(&spec.x));
        });
}

/// Occurrences per distinct non-missing value, in first-appearance order.
fn category_counts(table: &Table, column: &str) -> Vec<(String, usize)> {
    let Some(col) = table.column(column) else {
        return Vec::new();
    };

    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in &col.values {
        if value.is_missing() {
            continue;
        }
        let label = value.to_string();
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Axis formatter that shows category labels at integer grid positions and
/// hides every other mark.
fn category_axis_formatter(
    labels: Vec<String>,
) -> impl Fn(GridMark, &std::ops::RangeInclusive<f64>) -> String {
    move |mark, _range| {
        let idx = mark.value.round();
        if (mark.value - idx).abs() < 1e-3 && idx >= 0.0 && (idx as usize) < labels.len() {
            labels[idx as usize].clone()
        } else {
            String::new()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct HistogramBin {
    center: f64,
    width: f64,
    count: usize,
}

/// Equal-width bins over the value range, square-root choice of bin count.
fn bin_numeric(values: &[f64]) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Vec::new();
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        return vec![HistogramBin {
            center: min,
            width: 1.0,
            count: finite.len(),
        }];
    }

    let n_bins = (finite.len() as f64).sqrt().ceil().clamp(1.0, 50.0) as usize;
    let width = (max - min) / n_bins as f64;
    let mut counts = vec![0usize; n_bins];
    for v in &finite {
        let idx = (((v - min) / width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            center: min + (i as f64 + 0.5) * width,
            width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load, Delimiter};

    fn sample() -> Table {
        load(
            b"model;price;brand\nA;100;vw\nB;200;bmw\nC;50;vw\nA;25;vw\n",
            Delimiter::Semicolon,
        )
        .unwrap()
    }

    #[test]
    fn bar_sums_repeat_categories() {
        let sums = category_sums(&sample(), "model", "price");
        assert_eq!(
            sums,
            vec![
                ("A".to_string(), 125.0),
                ("B".to_string(), 200.0),
                ("C".to_string(), 50.0),
            ]
        );
    }

    #[test]
    fn category_counts_keep_first_appearance_order() {
        let counts = category_counts(&sample(), "brand");
        assert_eq!(
            counts,
            vec![("vw".to_string(), 3), ("bmw".to_string(), 1)]
        );
    }

    #[test]
    fn scatter_pairs_skip_missing_cells() {
        let table = load(b"x,y\n1,10\n2,\n3,30\n", Delimiter::Comma).unwrap();
        assert_eq!(numeric_pairs(&table, "x", "y"), vec![(1.0, 10.0), (3.0, 30.0)]);
    }

    #[test]
    fn binning_covers_all_values() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let bins = bin_numeric(&values);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 100);
        assert_eq!(bins.len(), 10);
    }

    #[test]
    fn constant_column_gets_one_bin() {
        let bins = bin_numeric(&[5.0, 5.0, 5.0]);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
        assert_eq!(bins[0].center, 5.0);
    }

    #[test]
    fn empty_values_produce_no_bins() {
        assert!(bin_numeric(&[]).is_empty());
    }
}
