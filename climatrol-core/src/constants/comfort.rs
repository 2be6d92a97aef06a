//! Comfort Defaults and Air-Quality Thresholds
//!
//! Default user preferences applied when a caller has not configured its
//! own, plus the air-quality scale the purifier decision operates on.

// ===== PREFERRED TEMPERATURE BAND =====

/// Lower bound of the default preferred temperature band (°C).
///
/// Source: ASHRAE 55 comfort zone, winter clothing assumption
pub const COMFORT_TEMP_MIN_C: f32 = 20.0;

/// Upper bound of the default preferred temperature band (°C).
///
/// Source: ASHRAE 55 comfort zone, summer clothing assumption
pub const COMFORT_TEMP_MAX_C: f32 = 26.0;

// ===== AIR CONDITIONING =====

/// Default outdoor temperature above which the air conditioner runs (°C).
///
/// Slightly above the preferred band so the AC does not cycle on
/// marginally warm days.
pub const DEFAULT_AC_THRESHOLD_C: f32 = 27.0;

/// Step the recommended AC threshold is rounded to (°C).
///
/// Matches the setpoint granularity of typical thermostats.
pub const AC_THRESHOLD_STEP_C: f32 = 0.5;

// ===== AIR QUALITY =====

/// Default AQI above which the air purifier runs.
///
/// 101-150 is "unhealthy for sensitive groups" on the EPA scale; the
/// purifier starts as soon as that band is entered.
///
/// Source: EPA Air Quality Index breakpoints
pub const DEFAULT_AQI_THRESHOLD: u16 = 100;

/// Top of the AQI scale.
///
/// Readings above this are reported by some providers during extreme
/// events; the decision rules accept them unchanged.
///
/// Source: EPA Air Quality Index breakpoints
pub const AQI_SCALE_MAX: u16 = 500;
