use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// One parsed cell. Every field of the source file becomes exactly one of
/// these; short rows are padded with `Missing` at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    write!(f, "{v:.0}")
                } else {
                    write!(f, "{v}")
                }
            }
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Numeric view of the cell, `None` for text and missing cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

// ---------------------------------------------------------------------------
// ColumnType – inferred per-column tag, fixed at load time
// ---------------------------------------------------------------------------

/// Binary type lattice: a column is `Numeric` when every non-missing value
/// parses as a number, `Text` otherwise. Assigned once by the loader and
/// never re-inferred; chart selection only ever asks "is numeric".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Numeric,
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::Text => write!(f, "text"),
        }
    }
}

// ---------------------------------------------------------------------------
// Column – one named column of cells
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All non-missing numeric values, in row order. Empty for text columns.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(CellValue::as_f64).collect()
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The parsed table. Invariant: every column has the same length and column
/// names are unique (the loader mangles duplicates). Immutable after load;
/// a new upload or delimiter change replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from already-equal-length columns.
    pub fn new(columns: Vec<Column>) -> Self {
        debug_assert!(
            columns.windows(2).all(|w| w[0].len() == w[1].len()),
            "all columns must have equal length"
        );
        Table { columns }
    }

    /// Number of data rows (header excluded).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether the named column was inferred as numeric. Unknown names
    /// report `false` so callers stay total over arbitrary name pairs.
    pub fn is_numeric(&self, name: &str) -> bool {
        self.column(name)
            .map_or(false, |c| c.ty == ColumnType::Numeric)
    }

    /// Non-missing numeric values of the named column (empty if the column
    /// is absent or text).
    pub fn numeric_values(&self, name: &str) -> Vec<f64> {
        self.column(name).map_or_else(Vec::new, Column::numeric_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_column(name: &str, values: &[f64]) -> Column {
        Column {
            name: name.to_string(),
            ty: ColumnType::Numeric,
            values: values.iter().map(|&v| CellValue::Number(v)).collect(),
        }
    }

    #[test]
    fn counts_and_lookup() {
        let table = Table::new(vec![
            numeric_column("a", &[1.0, 2.0]),
            numeric_column("b", &[3.0, 4.0]),
        ]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert!(table.is_numeric("a"));
        assert!(!table.is_numeric("missing"));
    }

    #[test]
    fn numeric_values_skip_missing_cells() {
        let col = Column {
            name: "score".to_string(),
            ty: ColumnType::Numeric,
            values: vec![
                CellValue::Number(1.5),
                CellValue::Missing,
                CellValue::Number(2.5),
            ],
        };
        assert_eq!(col.numeric_values(), vec![1.5, 2.5]);
    }

    #[test]
    fn display_formats_integers_without_fraction() {
        assert_eq!(CellValue::Number(3.0).to_string(), "3");
        assert_eq!(CellValue::Number(3.25).to_string(), "3.25");
        assert_eq!(CellValue::Missing.to_string(), "");
    }
}
