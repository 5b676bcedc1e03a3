use thiserror::Error;

/// A configuration that would break one of the engine's invariants.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum OptionsError {
    #[error("`{field}` must be finite (got {value})")]
    NotFinite { field: &'static str, value: f64 },

    #[error("`{field}` must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("ease_k must be in (0, 1) (got {0})")]
    EaseOutOfRange(f64),

    #[error("edge_guard {guard} leaves no interior on a {plane}px plane axis")]
    GuardTooLarge { guard: f64, plane: f64 },

    #[error("min_columns must be at least 1")]
    ZeroMinColumns,

    #[error("min_columns ({min}) exceeds max_columns ({max})")]
    ColumnRange { min: usize, max: usize },

    #[error("stagger_count must be at least 1")]
    ZeroStagger,
}
