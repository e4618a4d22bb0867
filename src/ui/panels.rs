use anyhow::Context;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader::Delimiter;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – axis selection
// ---------------------------------------------------------------------------

/// Render the left visualization panel: axis pickers plus a column listing.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Visualization");
    ui.separator();

    let Some(table) = &state.table else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state inside the combo closures.
    let columns: Vec<String> = table
        .column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let types: Vec<String> = table.columns().iter().map(|c| c.ty.to_string()).collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Axis selectors ----
            ui.strong("X-axis column");
            let current_x = state.x_column.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("x_axis")
                .selected_text(&current_x)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &columns {
                        if ui.selectable_label(current_x == *col, col).clicked() {
                            state.set_x_column(col.clone());
                        }
                    }
                });

            ui.add_space(4.0);
            ui.strong("Y-axis column");
            let current_y = state.y_column.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("y_axis")
                .selected_text(&current_y)
                .show_ui(ui, |ui: &mut Ui| {
                    for col in &columns {
                        if ui.selectable_label(current_y == *col, col).clicked() {
                            state.set_y_column(col.clone());
                        }
                    }
                });

            if let Some(chart) = &state.chart {
                ui.add_space(4.0);
                ui.label(format!("Chart type: {}", chart.kind));
            }

            ui.separator();

            // ---- Column listing with inferred types ----
            ui.strong("Columns");
            for (name, ty) in columns.iter().zip(types.iter()) {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(name);
                    ui.label(RichText::new(ty).weak().small());
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label("Separator:");
        let current = state.delimiter;
        egui::ComboBox::from_id_salt("delimiter")
            .selected_text(current.label())
            .show_ui(ui, |ui: &mut Ui| {
                for delimiter in Delimiter::ALL {
                    if ui
                        .selectable_label(current == delimiter, delimiter.label())
                        .clicked()
                    {
                        state.set_delimiter(delimiter);
                    }
                }
            });

        ui.separator();

        if let Some(source) = &state.source {
            ui.label(source.file_name());
        }
        if let Some(table) = &state.table {
            ui.label(format!(
                "{} rows, {} columns",
                table.n_rows(),
                table.n_cols()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open delimited data")
        .add_filter("Delimited text", &["csv", "tsv", "txt"])
        .pick_file();

    if let Some(path) = file {
        match std::fs::read(&path).with_context(|| format!("reading {}", path.display())) {
            Ok(bytes) => state.open_file(path, bytes),
            Err(e) => {
                log::error!("Failed to read file: {e:#}");
                state.status_message = Some(format!("Error loading file: {e:#}"));
            }
        }
    }
}
