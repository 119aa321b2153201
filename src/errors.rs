//! Error taxonomy for tour construction and annealing calibration.
//!
//! Mirrors the propagation policy of `spec.md` §7: constructor-level errors
//! (`InvalidTour`, `InvalidTimestamp`) surface immediately; engine-level
//! degenerate inputs (`CalibrationDegenerate`, `EmptyTour`) are reported
//! before any iterations run. Numeric edge cases inside the Metropolis test
//! (`exp` over/underflow) are clamped in place and never become an error
//! variant here.

use thiserror::Error;

/// Errors that can occur while constructing tours or calibrating the
/// Compressed Annealing engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnealingError {
    /// The depot appears among the visit points passed to a tour constructor.
    #[error("invalid tour: depot must not appear among the visit points")]
    InvalidTour,

    /// An hour or minute value is outside its valid range.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Compressed Annealing's Phase 1 calibration could not derive a finite
    /// starting temperature: every probe pair had zero energy difference, or
    /// the initial acceptance ratio `chi0` was not in `(0, 1)`.
    #[error("calibration degenerate: {0}")]
    CalibrationDegenerate(String),

    /// A tour or engine operation was attempted on a tour with fewer than
    /// one visit point.
    #[error("empty tour: at least one visit point is required")]
    EmptyTour,
}
