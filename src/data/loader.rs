use thiserror::Error;

use super::model::{CellValue, Column, ColumnType, Table};

// ---------------------------------------------------------------------------
// Delimiter – the enumerated field-separator choice
// ---------------------------------------------------------------------------

/// Field separator for the uploaded file. The set is fixed; there is no
/// free-form separator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Semicolon,
    Comma,
    Tab,
}

impl Delimiter {
    pub const ALL: [Delimiter; 3] = [Delimiter::Semicolon, Delimiter::Comma, Delimiter::Tab];

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Semicolon => b';',
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }

    /// Human-readable label for the delimiter selector.
    pub fn label(self) -> &'static str {
        match self {
            Delimiter::Semicolon => "Semicolon (;)",
            Delimiter::Comma => "Comma (,)",
            Delimiter::Tab => "Tab",
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Semicolon
    }
}

// ---------------------------------------------------------------------------
// LoadError – the single recoverable failure kind
// ---------------------------------------------------------------------------

/// Why an upload could not be turned into a [`Table`]. Surfaced to the user
/// as a status message; never aborts the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file is empty: expected a header row")]
    Empty,

    #[error("file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("malformed delimited text: {0}")]
    Malformed(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Parse raw uploaded bytes as delimited text.
///
/// The first record is the header and supplies column names (duplicates are
/// mangled pandas-style: `a`, `a.1`, `a.2`, …). Every later record becomes
/// one row; short rows are padded with missing cells and fields beyond the
/// header width are dropped, so all columns come out equal length by
/// construction. Per column the type is `Numeric` when every non-missing
/// cell parses as a number, `Text` otherwise.
///
/// Pure and idempotent: the same `(raw, delimiter)` pair always yields the
/// same table, with no side effects.
pub fn load(raw: &[u8], delimiter: Delimiter) -> Result<Table, LoadError> {
    let text = std::str::from_utf8(raw)?;
    if text.trim().is_empty() {
        return Err(LoadError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }
    let names = dedup_names(&headers);

    // Collect raw cells column-wise; `None` marks a padded short-row field.
    let mut raw_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for result in reader.records() {
        let record = result?;
        for (idx, cells) in raw_columns.iter_mut().enumerate() {
            cells.push(record.get(idx).map(str::to_string));
        }
    }

    let columns = names
        .into_iter()
        .zip(raw_columns)
        .map(|(name, cells)| build_column(name, &cells))
        .collect();

    Ok(Table::new(columns))
}

/// Make header names unique the way pandas mangles duplicates.
fn dedup_names(headers: &csv::StringRecord) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());
    for raw in headers {
        let base = raw.to_string();
        let mut name = base.clone();
        let mut suffix = 1;
        while names.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        names.push(name);
    }
    names
}

/// Infer the column type from the raw cells, then convert them.
fn build_column(name: String, cells: &[Option<String>]) -> Column {
    // An all-missing column counts as numeric, like an all-NaN float column.
    let numeric = cells.iter().all(|cell| match non_missing(cell) {
        Some(s) => s.parse::<f64>().is_ok(),
        None => true,
    });

    let values = cells
        .iter()
        .map(|cell| match non_missing(cell) {
            Some(s) if numeric => {
                // Inference above guarantees the parse succeeds.
                s.parse::<f64>().map_or(CellValue::Missing, CellValue::Number)
            }
            Some(s) => CellValue::Text(s.to_string()),
            None => CellValue::Missing,
        })
        .collect();

    Column {
        name,
        ty: if numeric { ColumnType::Numeric } else { ColumnType::Text },
        values,
    }
}

/// The trimmed cell content, or `None` for padded and blank fields.
fn non_missing(cell: &Option<String>) -> Option<&str> {
    let s = cell.as_deref()?.trim();
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_numeric_columns() {
        let table = load(b"a,b\n1,2\n3,4\n", Delimiter::Comma).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 2);
        assert!(table.is_numeric("a"));
        assert!(table.is_numeric("b"));
        assert_eq!(table.numeric_values("b"), vec![2.0, 4.0]);
    }

    #[test]
    fn text_and_numeric_columns() {
        let table = load(b"name;score\nalice;10\nbob;20\n", Delimiter::Semicolon).unwrap();
        assert!(!table.is_numeric("name"));
        assert!(table.is_numeric("score"));
        assert_eq!(
            table.column("name").unwrap().values,
            vec![
                CellValue::Text("alice".to_string()),
                CellValue::Text("bob".to_string()),
            ]
        );
    }

    #[test]
    fn tab_delimiter() {
        let table = load(b"x\ty\n1\t2\n", Delimiter::Tab).unwrap();
        assert_eq!(table.column_names(), vec!["x", "y"]);
        assert_eq!(table.n_rows(), 1);
    }

    #[test]
    fn short_rows_are_padded_not_rejected() {
        let table = load(b"a,b,c\n1,2,3\n4\n", Delimiter::Comma).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.column("b").unwrap().values[1], CellValue::Missing);
        assert_eq!(table.column("c").unwrap().values[1], CellValue::Missing);
    }

    #[test]
    fn long_rows_drop_extra_fields() {
        let table = load(b"a,b\n1,2,99\n", Delimiter::Comma).unwrap();
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.n_rows(), 1);
    }

    #[test]
    fn blank_cells_do_not_break_numeric_inference() {
        let table = load(b"v\n1\n\n3\n", Delimiter::Comma).unwrap();
        assert!(table.is_numeric("v"));
        assert_eq!(table.numeric_values("v"), vec![1.0, 3.0]);
    }

    #[test]
    fn mixed_column_falls_back_to_text() {
        let table = load(b"v\n1\nabc\n", Delimiter::Comma).unwrap();
        assert!(!table.is_numeric("v"));
    }

    #[test]
    fn header_only_input_yields_empty_columns() {
        let table = load(b"a,b\n", Delimiter::Comma).unwrap();
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.n_rows(), 0);
    }

    #[test]
    fn empty_input_is_a_load_error() {
        assert!(matches!(load(b"", Delimiter::Comma), Err(LoadError::Empty)));
        assert!(matches!(
            load(b"  \n  ", Delimiter::Semicolon),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn invalid_utf8_is_a_load_error() {
        assert!(matches!(
            load(&[0xff, 0xfe, 0x00], Delimiter::Comma),
            Err(LoadError::Utf8(_))
        ));
    }

    #[test]
    fn duplicate_headers_are_mangled() {
        let table = load(b"a,a,a\n1,2,3\n", Delimiter::Comma).unwrap();
        assert_eq!(table.column_names(), vec!["a", "a.1", "a.2"]);
    }

    #[test]
    fn load_is_idempotent() {
        let raw = b"name;score\nalice;10\nbob;20\n";
        let first = load(raw, Delimiter::Semicolon).unwrap();
        let second = load(raw, Delimiter::Semicolon).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn wrong_delimiter_yields_single_text_column() {
        // A comma-separated file read with semicolons is still a valid
        // one-column table, not a hard failure.
        let table = load(b"a,b\n1,2\n", Delimiter::Semicolon).unwrap();
        assert_eq!(table.n_cols(), 1);
        assert_eq!(table.column_names(), vec!["a,b"]);
        assert!(!table.is_numeric("a,b"));
    }
}
