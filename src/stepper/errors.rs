//! Error types for stepper and pacing misuse
//!
//! These are contract violations by the caller. The sequence is never touched
//! when one of them is returned.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// `resume()` called on a stepper that already reported completion
    #[error("{algorithm} stepper already completed; start a new run instead")]
    AlreadyCompleted { algorithm: super::Algorithm },

    /// Speed control value outside the accepted range
    #[error("speed {speed} is out of range ({min}..={max})")]
    SpeedOutOfRange { speed: i64, min: u32, max: u32 },

    #[error("unknown algorithm '{0}' (expected bubble, merge or quick)")]
    UnknownAlgorithm(String),
}
