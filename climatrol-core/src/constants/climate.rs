//! Season Cutoffs and Humidity Control Bands
//!
//! This module defines the fixed thresholds that drive season classification
//! and seasonal humidity control. Values follow common residential HVAC
//! practice rather than any particular sensor's capabilities.

// ===== SEASON CLASSIFICATION =====

/// Outdoor temperature below which conditions classify as winter (°C).
///
/// Chosen so that sustained heating demand maps to the winter band.
/// Temperatures at exactly this cutoff classify as mild.
///
/// Source: Common residential heating setpoint guidance
pub const SEASON_WINTER_BELOW_C: f32 = 10.0;

/// Outdoor temperature above which conditions classify as summer (°C).
///
/// Chosen so that sustained cooling demand maps to the summer band.
/// Temperatures at exactly this cutoff classify as mild.
///
/// Source: Common residential cooling setpoint guidance
pub const SEASON_SUMMER_ABOVE_C: f32 = 30.0;

// ===== SEASONAL HUMIDITY CONTROL =====

/// Winter humidification trigger (% relative humidity).
///
/// Heated indoor air tracks dry outdoor winter air; below this level
/// static, dry skin and respiratory irritation become likely.
///
/// Source: EPA recommended indoor range (30-50 % RH)
pub const HUMIDITY_WINTER_LOW_PCT: f32 = 30.0;

/// Summer dehumidification trigger (% relative humidity).
///
/// Above this level mold growth and dust-mite activity accelerate and
/// perceived temperature rises sharply.
///
/// Source: EPA recommended indoor maximum (60 % RH)
pub const HUMIDITY_SUMMER_HIGH_PCT: f32 = 60.0;

// ===== MILD-SEASON EXTREME BAND =====

/// Mild-season humidification trigger (% relative humidity).
///
/// In the mild band neither heating nor cooling dominates, so humidity
/// devices stay idle unless conditions are extreme. Strictly below this
/// level the humidifier still runs.
///
/// Brackets the winter trigger so mild behavior is never more aggressive
/// than the adjacent season.
pub const HUMIDITY_EXTREME_LOW_PCT: f32 = 20.0;

/// Mild-season dehumidification trigger (% relative humidity).
///
/// Strictly above this level the dehumidifier runs even in mild weather.
///
/// Brackets the summer trigger so mild behavior is never more aggressive
/// than the adjacent season.
pub const HUMIDITY_EXTREME_HIGH_PCT: f32 = 80.0;
