//! Shared error type.
//!
//! The simulation engine itself is total over well-formed input; the variants
//! here cover the checks performed before a run starts.  Sub-crates define
//! their own error enums and wrap `HosError` with a `From` impl where needed.

use thiserror::Error;

/// The top-level error type for `hos-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum HosError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid route leg: {0}")]
    InvalidLeg(String),
}

/// Shorthand result type for all `hos-*` crates.
pub type HosResult<T> = Result<T, HosError>;
