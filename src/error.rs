//! Configuration validation errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
/// Errors raised while validating deduplication configuration. The engine
/// itself is infallible once parameters have been constructed.
pub enum Error {
    #[error("kmer_len ({0}) must be <= window_len ({1})")]
    /// K-mer does not fit inside a single window
    KmerLongerThanWindow(usize, usize),
    #[error("{0} must be greater than zero")]
    /// A minimizer geometry parameter was zero
    ZeroParam(&'static str),
    #[error("max_error_frac must be within [0, 1] but got {0}")]
    /// Error fraction outside the unit interval (or NaN)
    ErrorFracOutOfRange(f64),
    #[error("unknown orientation `{0}`, expected `strict` or `tolerant`")]
    /// Orientation string did not parse
    UnknownOrientation(String),
}
