// File: crates/chart-core/src/error.rs
// Summary: Render error taxonomy; every error is raised before instructions are emitted.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The data sequence has zero items; rendering "nothing" is the caller's call.
    #[error("chart has no data points")]
    EmptyData,

    /// A color was required but the style palette is empty.
    #[error("style palette has no colors")]
    EmptyPalette,

    /// The line layout needs at least two points to interpolate.
    #[error("line chart needs at least {needed} data points, got {got}")]
    InsufficientPoints { needed: usize, got: usize },
}
