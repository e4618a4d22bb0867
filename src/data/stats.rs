use super::model::{ColumnType, Table};

// ---------------------------------------------------------------------------
// Descriptive statistics for numeric columns
// ---------------------------------------------------------------------------

/// The `describe()` row for one numeric column: count, mean, sample std,
/// min, quartiles, max. Fields other than `count` are NaN when the column
/// has no (or for std, fewer than two) non-missing values.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Summarise every numeric column of the table, in column order.
/// Total: a table with no numeric columns yields an empty vec.
pub fn describe(table: &Table) -> Vec<ColumnSummary> {
    table
        .columns()
        .iter()
        .filter(|c| c.ty == ColumnType::Numeric)
        .map(|c| summarize(&c.name, &c.numeric_values()))
        .collect()
}

fn summarize(name: &str, values: &[f64]) -> ColumnSummary {
    let count = values.len();
    if count == 0 {
        return ColumnSummary {
            name: name.to_string(),
            count,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = values.iter().sum::<f64>() / count as f64;

    // Sample standard deviation (n − 1), NaN for a single value.
    let std = if count > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        var.sqrt()
    } else {
        f64::NAN
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    ColumnSummary {
        name: name.to_string(),
        count,
        mean,
        std,
        min: sorted[0],
        q25: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.50),
        q75: percentile(&sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Linearly interpolated percentile over already-sorted values.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load, Delimiter};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn summary_matches_describe_semantics() {
        let table = load(b"v\n1\n2\n3\n4\n", Delimiter::Comma).unwrap();
        let summaries = describe(&table);
        assert_eq!(summaries.len(), 1);

        let s = &summaries[0];
        assert_eq!(s.count, 4);
        assert!(close(s.mean, 2.5));
        // Sample std of 1..4 is sqrt(5/3).
        assert!(close(s.std, (5.0_f64 / 3.0).sqrt()));
        assert!(close(s.min, 1.0));
        assert!(close(s.q25, 1.75));
        assert!(close(s.median, 2.5));
        assert!(close(s.q75, 3.25));
        assert!(close(s.max, 4.0));
    }

    #[test]
    fn text_columns_are_skipped() {
        let table = load(b"name;score\nalice;10\nbob;20\n", Delimiter::Semicolon).unwrap();
        let summaries = describe(&table);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "score");
    }

    #[test]
    fn missing_cells_are_excluded_from_count() {
        let table = load(b"v\n1\n\n3\n", Delimiter::Comma).unwrap();
        let s = &describe(&table)[0];
        assert_eq!(s.count, 2);
        assert!(close(s.mean, 2.0));
    }

    #[test]
    fn single_value_has_nan_std() {
        let table = load(b"v\n7\n", Delimiter::Comma).unwrap();
        let s = &describe(&table)[0];
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert!(close(s.median, 7.0));
    }

    #[test]
    fn empty_numeric_column_is_all_nan() {
        let table = load(b"v\n", Delimiter::Comma).unwrap();
        let s = &describe(&table)[0];
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan());
        assert!(s.min.is_nan());
    }
}
