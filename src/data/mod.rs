/// Data layer: readings, loading, and the filter → sort → statistics pipeline.
///
/// Architecture:
/// ```text
///  data.json (HTTP) / .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → SensorDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  criteria predicates → visible indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   sort    │  stable column ordering of the indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  max / median / mean / mode per column
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod sort;
pub mod stats;
pub mod time;
