//! Error types for the DietCalc library

use thiserror::Error;

/// Errors raised while turning raw form input into a biometric profile
///
/// Numeric fields never produce errors (they default to zero); only the
/// enum selections can fail, since an unknown selector value has no
/// meaningful substitute.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Unknown sex: {0:?} (expected \"male\" or \"female\")")]
    UnknownSex(String),

    #[error("Unknown activity level: {0:?}")]
    UnknownActivityLevel(String),

    #[error("Activity level {0} out of range (expected 1-5)")]
    ActivityLevelOutOfRange(u8),
}
