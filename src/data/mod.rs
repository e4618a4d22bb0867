/// Data layer: core types, loading, and summary statistics.
///
/// Architecture:
/// ```text
///  uploaded bytes + delimiter
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse delimited text → Table | LoadError
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  named columns, inferred types, equal lengths
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  describe numeric columns → ColumnSummary rows
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
