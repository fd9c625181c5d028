//! Crate-level error type for mix computations.

use thiserror::Error;

/// Error returned by [`mix()`](crate::mix()) and the solver beneath it.
///
/// Failures are final: the orchestrator never retries, and on failure the
/// palette's ratios are left untouched. Callers decide whether to retry
/// with a different color space or palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MixError {
    /// The palette has zero entries; the objective is undefined.
    #[error("palette is empty")]
    EmptyPalette,

    /// The minimizer failed to converge or hit a numerical failure
    /// (non-finite objective or gradient, degenerate weight sum). Carries
    /// the solver's diagnostic message.
    #[error("optimization failed: {0}")]
    Optimization(String),
}
