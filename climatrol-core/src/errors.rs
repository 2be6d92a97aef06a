//! Error Types for Preference Construction
//!
//! The decision engine itself has no failure modes: `evaluate` is a total
//! function and always yields a complete snapshot. Errors only arise when a
//! caller constructs preferences that cannot describe a usable comfort band.
//!
//! Error values follow the same constraints as the rest of the crate:
//!
//! 1. **Small Size**: all data is inline, no `String`, so errors can be
//!    returned cheaply and stored in fixed-size queues.
//! 2. **Copy Semantics**: errors implement `Copy` for ergonomic matching.
//! 3. **Actionable Information**: each variant carries the offending values
//!    so the caller can correct its configuration without further queries.

use thiserror_no_std::Error;

/// Result type for preference construction
pub type PreferencesResult<T> = Result<T, PreferencesError>;

/// Errors raised when building user preferences - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PreferencesError {
    /// Preferred band lower bound exceeds the upper bound
    #[error("Preferred range inverted: min {min_c} exceeds max {max_c}")]
    InvertedRange {
        /// Configured lower bound (°C)
        min_c: f32,
        /// Configured upper bound (°C)
        max_c: f32,
    },

    /// A temperature field is not a valid number (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PreferencesError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvertedRange { min_c, max_c } =>
                defmt::write!(fmt, "Range inverted: {} > {}", min_c, max_c),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
