use std::path::PathBuf;

use crate::chart::{select_chart, ChartSpec};
use crate::data::loader::{load, Delimiter};
use crate::data::model::Table;
use crate::data::stats::{describe, ColumnSummary};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The uploaded file kept for the session. Holding the raw bytes lets a
/// delimiter change re-parse without another disk read; a new upload
/// replaces the whole struct.
pub struct SourceFile {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// The full UI state, independent of rendering. One instance per session;
/// every interaction (upload, delimiter change, axis change) recomputes the
/// derived fields synchronously.
pub struct AppState {
    /// Last uploaded file (None until the user opens one).
    pub source: Option<SourceFile>,

    /// Field separator used to parse `source`.
    pub delimiter: Delimiter,

    /// Loaded table (None until a successful load).
    pub table: Option<Table>,

    /// Selected x-axis column.
    pub x_column: Option<String>,

    /// Selected y-axis column.
    pub y_column: Option<String>,

    /// Chart derived from the current table and axis selection.
    pub chart: Option<ChartSpec>,

    /// Per-numeric-column statistics for the current table.
    pub summaries: Vec<ColumnSummary>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            source: None,
            delimiter: Delimiter::default(),
            table: None,
            x_column: None,
            y_column: None,
            chart: None,
            summaries: Vec::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly uploaded file and parse it with the current delimiter.
    pub fn open_file(&mut self, path: PathBuf, bytes: Vec<u8>) {
        self.source = Some(SourceFile { path, bytes });
        self.reload();
    }

    /// Switch the delimiter and re-parse the cached upload, if any.
    pub fn set_delimiter(&mut self, delimiter: Delimiter) {
        if self.delimiter == delimiter {
            return;
        }
        self.delimiter = delimiter;
        if self.source.is_some() {
            self.reload();
        }
    }

    /// Parse the cached bytes into a fresh table. On failure the previous
    /// table (or the initial "no data" state) stays untouched and the error
    /// becomes the status message.
    pub fn reload(&mut self) {
        let Some(source) = &self.source else {
            return;
        };
        match load(&source.bytes, self.delimiter) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows x {} columns from {}",
                    table.n_rows(),
                    table.n_cols(),
                    source.file_name()
                );
                self.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", source.file_name());
                self.status_message = Some(format!("Error loading file: {e}"));
            }
        }
    }

    /// Replace the table wholesale and reset the derived state: default
    /// axes (first and second column), summaries, and the chart.
    fn set_table(&mut self, table: Table) {
        let names = table.column_names();
        self.x_column = names.first().map(|s| s.to_string());
        self.y_column = names.get(1).or_else(|| names.first()).map(|s| s.to_string());
        self.summaries = describe(&table);
        self.table = Some(table);
        self.status_message = None;
        self.reselect_chart();
    }

    /// Set the x-axis column and recompute the chart.
    pub fn set_x_column(&mut self, column: String) {
        self.x_column = Some(column);
        self.reselect_chart();
    }

    /// Set the y-axis column and recompute the chart.
    pub fn set_y_column(&mut self, column: String) {
        self.y_column = Some(column);
        self.reselect_chart();
    }

    /// Recompute the chart spec from the current table and axis selection.
    fn reselect_chart(&mut self) {
        self.chart = match (&self.table, &self.x_column, &self.y_column) {
            (Some(table), Some(x), Some(y)) => Some(select_chart(table, x, y)),
            _ => None,
        };
    }
}
