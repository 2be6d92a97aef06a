//! Constants for Climatrol Core
//!
//! This module provides centralized, well-documented constants used throughout
//! the decision engine. All numeric values are defined here with clear
//! explanations of their purpose, source, and rationale.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Climate**: season cutoffs and humidity control bands
//! - **Comfort**: default user preferences and air-quality thresholds
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, include comprehensive documentation
//! 3. Reference industry standards or guidelines where applicable
//! 4. Use descriptive names that include units

/// Season cutoffs and humidity control bands.
pub mod climate;

/// Comfort defaults and air-quality thresholds.
pub mod comfort;

// Re-export commonly used constants for convenience
pub use climate::{
    SEASON_WINTER_BELOW_C, SEASON_SUMMER_ABOVE_C,
    HUMIDITY_WINTER_LOW_PCT, HUMIDITY_SUMMER_HIGH_PCT,
    HUMIDITY_EXTREME_LOW_PCT, HUMIDITY_EXTREME_HIGH_PCT,
};

pub use comfort::{
    COMFORT_TEMP_MIN_C, COMFORT_TEMP_MAX_C,
    DEFAULT_AC_THRESHOLD_C, DEFAULT_AQI_THRESHOLD,
    AC_THRESHOLD_STEP_C, AQI_SCALE_MAX,
};
