//! DietCalc Core Library
//!
//! This crate contains the pure calorie-estimation logic shared between
//! the native and WASM frontends: biometric profile types, the
//! Mifflin-St Jeor TDEE estimator, the form-intake boundary, and
//! macronutrient arithmetic.

pub mod energy;
pub mod errors;
pub mod intake;
pub mod nutrition;
pub mod profile;

// Re-export commonly used items
pub use energy::*;
pub use errors::*;
pub use intake::*;
pub use profile::*;
