use std::fmt;

use crate::data::model::Table;

// ---------------------------------------------------------------------------
// ChartSpec – which chart family to draw, and with what axis bindings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Bar,
    Histogram,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Scatter => write!(f, "scatter"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Histogram => write!(f, "histogram"),
        }
    }
}

/// Description of the chart to render. Recomputed on every axis-selection
/// change, never cached; the renderer is free to read the bound columns
/// straight from the table.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x: String,
    /// Absent for histograms, which plot the x column alone.
    pub y: Option<String>,
    pub title: String,
}

// ---------------------------------------------------------------------------
// Chart selection heuristic
// ---------------------------------------------------------------------------

/// Pick the chart family for a pair of axis columns.
///
/// Rule order matters and is checked top to bottom:
/// 1. both columns numeric → scatter of y against x;
/// 2. y numeric (x anything) → bar of y by x;
/// 3. y not numeric → histogram of x alone, y ignored.
///
/// Total and deterministic: unknown column names count as non-numeric, and
/// `x == y` needs no special case (two numeric picks of the same column are
/// just a scatter on the diagonal).
pub fn select_chart(table: &Table, x: &str, y: &str) -> ChartSpec {
    let x_numeric = table.is_numeric(x);
    let y_numeric = table.is_numeric(y);

    if x_numeric && y_numeric {
        ChartSpec {
            kind: ChartKind::Scatter,
            x: x.to_string(),
            y: Some(y.to_string()),
            title: format!("{y} vs {x}"),
        }
    } else if y_numeric {
        ChartSpec {
            kind: ChartKind::Bar,
            x: x.to_string(),
            y: Some(y.to_string()),
            title: format!("{y} by {x}"),
        }
    } else {
        ChartSpec {
            kind: ChartKind::Histogram,
            x: x.to_string(),
            y: None,
            title: format!("Distribution of {x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load, Delimiter};

    fn sample() -> Table {
        load(
            b"name;score;price;city\nalice;10;100;Oslo\nbob;20;200;Rio\n",
            Delimiter::Semicolon,
        )
        .unwrap()
    }

    #[test]
    fn numeric_pair_is_scatter() {
        let spec = select_chart(&sample(), "score", "price");
        assert_eq!(spec.kind, ChartKind::Scatter);
        assert_eq!(spec.y.as_deref(), Some("price"));
        assert_eq!(spec.title, "price vs score");
    }

    #[test]
    fn numeric_y_with_text_x_is_bar() {
        let spec = select_chart(&sample(), "name", "score");
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.title, "score by name");
    }

    #[test]
    fn text_y_is_histogram_of_x() {
        let spec = select_chart(&sample(), "city", "name");
        assert_eq!(spec.kind, ChartKind::Histogram);
        assert_eq!(spec.y, None);
        assert_eq!(spec.title, "Distribution of city");
    }

    #[test]
    fn numeric_x_with_text_y_is_still_histogram() {
        // Rule 3 keys on y alone; a numeric x does not rescue the pair.
        let spec = select_chart(&sample(), "score", "city");
        assert_eq!(spec.kind, ChartKind::Histogram);
        assert_eq!(spec.title, "Distribution of score");
    }

    #[test]
    fn same_column_twice_is_deterministic() {
        let spec = select_chart(&sample(), "score", "score");
        assert_eq!(spec.kind, ChartKind::Scatter);
        assert_eq!(spec.title, "score vs score");
    }

    #[test]
    fn every_type_pair_hits_exactly_one_branch() {
        let table = sample();
        for x in ["score", "name"] {
            for y in ["price", "city"] {
                let spec = select_chart(&table, x, y);
                let expected = match (table.is_numeric(x), table.is_numeric(y)) {
                    (true, true) => ChartKind::Scatter,
                    (_, true) => ChartKind::Bar,
                    (_, false) => ChartKind::Histogram,
                };
                assert_eq!(spec.kind, expected);
            }
        }
    }

    #[test]
    fn unknown_columns_fall_through_to_histogram() {
        let spec = select_chart(&sample(), "nope", "also_nope");
        assert_eq!(spec.kind, ChartKind::Histogram);
        assert_eq!(spec.title, "Distribution of nope");
    }
}
