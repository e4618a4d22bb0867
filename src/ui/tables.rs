use eframe::egui::Ui;
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::Table;
use crate::data::stats::ColumnSummary;

/// How many rows of the dataset the preview shows.
pub const PREVIEW_ROWS: usize = 10;

const HEADER_HEIGHT: f32 = 22.0;
const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Data preview – the first rows of the loaded table
// ---------------------------------------------------------------------------

pub fn preview_table(ui: &mut Ui, table: &Table) {
    let n_rows = table.n_rows().min(PREVIEW_ROWS);

    TableBuilder::new(ui)
        .id_salt("data_preview")
        .striped(true)
        .columns(TableColumn::auto().at_least(60.0), table.n_cols())
        .header(HEADER_HEIGHT, |mut header| {
            for col in table.columns() {
                header.col(|ui| {
                    ui.strong(&col.name);
                });
            }
        })
        .body(|mut body| {
            for row_idx in 0..n_rows {
                body.row(ROW_HEIGHT, |mut row| {
                    for col in table.columns() {
                        row.col(|ui| {
                            ui.label(col.values[row_idx].to_string());
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Statistical summary – describe() over the numeric columns
// ---------------------------------------------------------------------------

pub fn summary_table(ui: &mut Ui, summaries: &[ColumnSummary]) {
    if summaries.is_empty() {
        ui.label("No numeric columns to summarise.");
        return;
    }

    const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    TableBuilder::new(ui)
        .id_salt("summary")
        .striped(true)
        .columns(TableColumn::auto().at_least(60.0), summaries.len() + 1)
        .header(HEADER_HEIGHT, |mut header| {
            header.col(|_ui| {});
            for summary in summaries {
                header.col(|ui| {
                    ui.strong(&summary.name);
                });
            }
        })
        .body(|mut body| {
            for (stat_idx, label) in STAT_LABELS.iter().enumerate() {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.strong(*label);
                    });
                    for summary in summaries {
                        row.col(|ui| {
                            ui.label(stat_cell(summary, stat_idx));
                        });
                    }
                });
            }
        });
}

fn stat_cell(summary: &ColumnSummary, stat_idx: usize) -> String {
    match stat_idx {
        0 => summary.count.to_string(),
        1 => fmt_stat(summary.mean),
        2 => fmt_stat(summary.std),
        3 => fmt_stat(summary.min),
        4 => fmt_stat(summary.q25),
        5 => fmt_stat(summary.median),
        6 => fmt_stat(summary.q75),
        _ => fmt_stat(summary.max),
    }
}

fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.2}")
    }
}
