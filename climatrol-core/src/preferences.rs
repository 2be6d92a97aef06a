//! User-Configured Comfort Preferences
//!
//! Preferences are owned by the caller and passed by reference into each
//! evaluation; the engine never mutates or stores them. `Default` carries
//! sensible comfort values so a caller can start without any configuration
//! and adjust from there with the builder-style setters.
//!
//! The only invariant a preference set must uphold is an ordered preferred
//! band (min ≤ max). The checked constructor enforces it; the setters keep
//! it by construction.

use crate::constants::comfort::{
    COMFORT_TEMP_MAX_C, COMFORT_TEMP_MIN_C, DEFAULT_AC_THRESHOLD_C, DEFAULT_AQI_THRESHOLD,
};
use crate::errors::{PreferencesError, PreferencesResult};

/// Comfort preferences for one room
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserPreferences {
    /// Lower bound of the preferred temperature band (°C)
    pub preferred_temp_min_c: f32,

    /// Upper bound of the preferred temperature band (°C)
    pub preferred_temp_max_c: f32,

    /// Outdoor temperature strictly above which the AC runs (°C)
    pub ac_threshold_c: f32,

    /// AQI strictly above which the purifier runs
    pub aqi_threshold: u16,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preferred_temp_min_c: COMFORT_TEMP_MIN_C,
            preferred_temp_max_c: COMFORT_TEMP_MAX_C,
            ac_threshold_c: DEFAULT_AC_THRESHOLD_C,
            aqi_threshold: DEFAULT_AQI_THRESHOLD,
        }
    }
}

impl UserPreferences {
    /// Create preferences from explicit values
    ///
    /// Rejects a preferred band whose bounds are inverted or non-finite.
    pub fn new(
        preferred_temp_min_c: f32,
        preferred_temp_max_c: f32,
        ac_threshold_c: f32,
        aqi_threshold: u16,
    ) -> PreferencesResult<Self> {
        if !preferred_temp_min_c.is_finite()
            || !preferred_temp_max_c.is_finite()
            || !ac_threshold_c.is_finite()
        {
            return Err(PreferencesError::InvalidValue);
        }

        if preferred_temp_min_c > preferred_temp_max_c {
            return Err(PreferencesError::InvertedRange {
                min_c: preferred_temp_min_c,
                max_c: preferred_temp_max_c,
            });
        }

        Ok(Self {
            preferred_temp_min_c,
            preferred_temp_max_c,
            ac_threshold_c,
            aqi_threshold,
        })
    }

    /// Set the AC activation threshold
    pub fn with_ac_threshold(mut self, ac_threshold_c: f32) -> Self {
        self.ac_threshold_c = ac_threshold_c;
        self
    }

    /// Set the air-quality alert level
    pub fn with_aqi_threshold(mut self, aqi_threshold: u16) -> Self {
        self.aqi_threshold = aqi_threshold;
        self
    }

    /// Set the preferred temperature band
    ///
    /// Fails like [`UserPreferences::new`] on an inverted or non-finite band.
    pub fn with_preferred_range(
        mut self,
        min_c: f32,
        max_c: f32,
    ) -> PreferencesResult<Self> {
        if !min_c.is_finite() || !max_c.is_finite() {
            return Err(PreferencesError::InvalidValue);
        }
        if min_c > max_c {
            return Err(PreferencesError::InvertedRange { min_c, max_c });
        }

        self.preferred_temp_min_c = min_c;
        self.preferred_temp_max_c = max_c;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_comfort_zone() {
        let prefs = UserPreferences::default();

        assert_eq!(prefs.preferred_temp_min_c, 20.0);
        assert_eq!(prefs.preferred_temp_max_c, 26.0);
        assert_eq!(prefs.ac_threshold_c, 27.0);
        assert_eq!(prefs.aqi_threshold, 100);
    }

    #[test]
    fn checked_construction() {
        assert!(UserPreferences::new(18.0, 24.0, 26.0, 75).is_ok());

        // Degenerate band (min == max) is allowed
        assert!(UserPreferences::new(22.0, 22.0, 26.0, 75).is_ok());
    }

    #[test]
    fn inverted_band_is_rejected() {
        let result = UserPreferences::new(26.0, 20.0, 27.0, 100);
        assert_eq!(
            result,
            Err(PreferencesError::InvertedRange { min_c: 26.0, max_c: 20.0 })
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(
            UserPreferences::new(f32::NAN, 24.0, 26.0, 75),
            Err(PreferencesError::InvalidValue)
        );
        assert_eq!(
            UserPreferences::default().with_preferred_range(20.0, f32::INFINITY),
            Err(PreferencesError::InvalidValue)
        );
    }

    #[test]
    fn builder_setters() {
        let prefs = UserPreferences::default()
            .with_ac_threshold(24.5)
            .with_aqi_threshold(150);

        assert_eq!(prefs.ac_threshold_c, 24.5);
        assert_eq!(prefs.aqi_threshold, 150);

        let prefs = prefs.with_preferred_range(18.0, 22.0).unwrap();
        assert_eq!(prefs.preferred_temp_min_c, 18.0);
        assert_eq!(prefs.preferred_temp_max_c, 22.0);
    }
}
