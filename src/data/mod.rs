/// Data layer: sample tables, loading, and interpolation.
///
/// Architecture:
/// ```text
///   dat_*.dat (whitespace triples)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse tokens → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  Vec<Sample>, x non-decreasing (caller invariant)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  interp   │  piecewise-linear lookup, clamp past the range
///   └──────────┘
/// ```
pub mod interp;
pub mod loader;
pub mod model;
