//! Occupancy-Aware Device Controller
//!
//! ## Overview
//!
//! The controller turns one environmental reading, one preference set, and
//! the current occupancy into a [`DeviceState`] snapshot. Each device is
//! decided independently; only occupancy gates them all:
//!
//! ```text
//! reading ─┬─> season ──> humidity strategy ──> humidifier / dehumidifier
//!          ├─> temperature > AC threshold  ──> air conditioner
//!          └─> AQI > alert level           ──> air purifier
//!                      vacant room ──> everything off
//! ```
//!
//! ## Determinism
//!
//! `evaluate` is a pure function: no clocks, no randomness, no state kept
//! between calls. Two calls with identical inputs yield identical
//! snapshots, and concurrent callers need no coordination.
//!
//! ## Boundary Behavior
//!
//! Every comparison is strict, so a device is never ON when its reading
//! sits exactly at the configured cutoff. This makes the rules
//! deterministic under rounding: a value that lands on the threshold reads
//! as "not yet past it".
//!
//! ## Usage Example
//!
//! ```rust
//! use climatrol_core::{
//!     DeviceController, EnvironmentalReading, Occupancy, Season, UserPreferences,
//! };
//!
//! let controller = DeviceController::default();
//! let prefs = UserPreferences::default();
//!
//! let reading = EnvironmentalReading::new(33.0, 70.0, 130);
//! let state = controller.evaluate(reading, &prefs, Occupancy::Occupied);
//!
//! assert_eq!(state.season, Season::Summer);
//! assert!(state.ac_on);
//! assert!(state.dehumidifier_on);
//! assert!(state.purifier_on);
//! ```

use crate::constants::climate::{
    HUMIDITY_EXTREME_HIGH_PCT, HUMIDITY_EXTREME_LOW_PCT, HUMIDITY_SUMMER_HIGH_PCT,
    HUMIDITY_WINTER_LOW_PCT,
};
use crate::constants::comfort::{AC_THRESHOLD_STEP_C, COMFORT_TEMP_MAX_C, COMFORT_TEMP_MIN_C};
use crate::occupancy::Occupancy;
use crate::preferences::UserPreferences;
use crate::reading::EnvironmentalReading;
use crate::season::{Season, SeasonClassifier};
use crate::state::DeviceState;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! trace_decision {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace_decision {
    ($($arg:tt)*) => {};
}

/// Humidity cutoffs for the seasonal control strategy
///
/// The winter and summer triggers drive their seasons directly; the extreme
/// band applies in mild weather, where humidity devices stay idle unless
/// conditions leave it.
#[derive(Debug, Clone)]
pub struct HumidityBands {
    /// Winter: humidify strictly below this (%)
    winter_low_pct: f32,

    /// Summer: dehumidify strictly above this (%)
    summer_high_pct: f32,

    /// Mild: humidify strictly below this (%)
    extreme_low_pct: f32,

    /// Mild: dehumidify strictly above this (%)
    extreme_high_pct: f32,
}

impl Default for HumidityBands {
    fn default() -> Self {
        Self {
            winter_low_pct: HUMIDITY_WINTER_LOW_PCT,
            summer_high_pct: HUMIDITY_SUMMER_HIGH_PCT,
            extreme_low_pct: HUMIDITY_EXTREME_LOW_PCT,
            extreme_high_pct: HUMIDITY_EXTREME_HIGH_PCT,
        }
    }
}

impl HumidityBands {
    /// Create bands with custom cutoffs
    ///
    /// Callers are expected to keep the extreme band outside the seasonal
    /// triggers (extreme_low ≤ winter_low, extreme_high ≥ summer_high);
    /// the bands are used as given.
    pub fn new_with_limits(
        winter_low_pct: f32,
        summer_high_pct: f32,
        extreme_low_pct: f32,
        extreme_high_pct: f32,
    ) -> Self {
        Self {
            winter_low_pct,
            summer_high_pct,
            extreme_low_pct,
            extreme_high_pct,
        }
    }

    /// Winter humidification trigger in effect (%)
    pub fn winter_low_pct(&self) -> f32 {
        self.winter_low_pct
    }

    /// Summer dehumidification trigger in effect (%)
    pub fn summer_high_pct(&self) -> f32 {
        self.summer_high_pct
    }
}

/// Decision engine mapping environmental inputs to device states
///
/// Holds its season cutoffs and humidity bands as explicit configuration -
/// nothing is read from process-wide state at call time.
#[derive(Debug, Clone, Default)]
pub struct DeviceController {
    seasons: SeasonClassifier,
    humidity: HumidityBands,
}

impl DeviceController {
    /// Create a controller with custom season cutoffs and humidity bands
    pub fn new(seasons: SeasonClassifier, humidity: HumidityBands) -> Self {
        Self { seasons, humidity }
    }

    /// Evaluate one reading against the caller's preferences
    ///
    /// Total over all inputs: out-of-range values run through the same
    /// comparisons and every call yields a complete snapshot. A vacant room
    /// forces all devices off; the season is still classified and reported.
    pub fn evaluate(
        &self,
        reading: EnvironmentalReading,
        prefs: &UserPreferences,
        occupancy: Occupancy,
    ) -> DeviceState {
        let season = self.seasons.classify(reading.temperature_c);

        if !occupancy.is_occupied() {
            trace_decision!(
                "room vacant, all devices off (season {})",
                season.name()
            );
            return DeviceState::all_off(season);
        }

        let ac_on = reading.temperature_c > prefs.ac_threshold_c;

        let (humidifier_on, dehumidifier_on) = match season {
            Season::Winter => (reading.humidity_pct < self.humidity.winter_low_pct, false),
            Season::Summer => (false, reading.humidity_pct > self.humidity.summer_high_pct),
            Season::Mild => (
                reading.humidity_pct < self.humidity.extreme_low_pct,
                reading.humidity_pct > self.humidity.extreme_high_pct,
            ),
        };

        let purifier_on = reading.aqi > prefs.aqi_threshold;

        trace_decision!(
            "{} {:.1}C {:.0}% aqi {}: ac={} hum={} dehum={} purifier={}",
            season.name(),
            reading.temperature_c,
            reading.humidity_pct,
            reading.aqi,
            ac_on,
            humidifier_on,
            dehumidifier_on,
            purifier_on
        );

        DeviceState {
            ac_on,
            humidifier_on,
            dehumidifier_on,
            purifier_on,
            season,
        }
    }

    /// Suggest preferences matched to the current conditions
    ///
    /// Advisory only - nothing is stored and the caller decides whether to
    /// adopt the suggestion. The AC threshold tracks the observed
    /// temperature (rounded to the thermostat step), the air-quality alert
    /// level tracks the observed AQI, and the preferred band is the comfort
    /// default.
    pub fn recommend_for(&self, reading: EnvironmentalReading) -> UserPreferences {
        UserPreferences {
            preferred_temp_min_c: COMFORT_TEMP_MIN_C,
            preferred_temp_max_c: COMFORT_TEMP_MAX_C,
            ac_threshold_c: round_to_step(reading.temperature_c, AC_THRESHOLD_STEP_C),
            aqi_threshold: reading.aqi,
        }
    }

    /// Season cutoffs in effect
    pub fn seasons(&self) -> &SeasonClassifier {
        &self.seasons
    }

    /// Humidity bands in effect
    pub fn humidity_bands(&self) -> &HumidityBands {
        &self.humidity
    }
}

/// Round a value to the nearest multiple of `step`
fn round_to_step(value: f32, step: f32) -> f32 {
    libm::roundf(value / step) * step
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(reading: EnvironmentalReading, prefs: &UserPreferences) -> DeviceState {
        DeviceController::default().evaluate(reading, prefs, Occupancy::Occupied)
    }

    #[test]
    fn cold_dry_day_drives_humidifier_only() {
        let prefs = UserPreferences::default()
            .with_ac_threshold(22.0)
            .with_aqi_threshold(50);
        let state = occupied(EnvironmentalReading::new(5.0, 20.0, 10), &prefs);

        assert_eq!(state.season, Season::Winter);
        assert!(!state.ac_on);
        assert!(state.humidifier_on);
        assert!(!state.dehumidifier_on);
        assert!(!state.purifier_on);
    }

    #[test]
    fn hot_humid_polluted_day_drives_three_devices() {
        let prefs = UserPreferences::default()
            .with_ac_threshold(28.0)
            .with_aqi_threshold(100);
        let state = occupied(EnvironmentalReading::new(35.0, 80.0, 120), &prefs);

        assert_eq!(state.season, Season::Summer);
        assert!(state.ac_on);
        assert!(!state.humidifier_on);
        assert!(state.dehumidifier_on);
        assert!(state.purifier_on);
    }

    #[test]
    fn vacant_room_forces_everything_off() {
        let prefs = UserPreferences::default()
            .with_ac_threshold(28.0)
            .with_aqi_threshold(100);
        let reading = EnvironmentalReading::new(35.0, 80.0, 120);
        let state = DeviceController::default().evaluate(reading, &prefs, Occupancy::Vacant);

        assert!(!state.any_on());
        // Season is still classified for display
        assert_eq!(state.season, Season::Summer);
    }

    #[test]
    fn ac_stays_off_at_exact_threshold() {
        let prefs = UserPreferences::default().with_ac_threshold(22.0);

        let at = occupied(EnvironmentalReading::new(22.0, 50.0, 10), &prefs);
        assert!(!at.ac_on);

        let above = occupied(EnvironmentalReading::new(22.1, 50.0, 10), &prefs);
        assert!(above.ac_on);
    }

    #[test]
    fn purifier_stays_off_at_exact_threshold() {
        let prefs = UserPreferences::default().with_aqi_threshold(100);

        let at = occupied(EnvironmentalReading::new(20.0, 50.0, 100), &prefs);
        assert!(!at.purifier_on);

        let above = occupied(EnvironmentalReading::new(20.0, 50.0, 101), &prefs);
        assert!(above.purifier_on);
    }

    #[test]
    fn humidity_devices_stay_off_at_exact_cutoffs() {
        let prefs = UserPreferences::default();
        let controller = DeviceController::default();

        // Winter, humidity exactly at the humidification trigger
        let winter = controller.evaluate(
            EnvironmentalReading::new(0.0, 30.0, 10),
            &prefs,
            Occupancy::Occupied,
        );
        assert!(!winter.humidifier_on);

        // Summer, humidity exactly at the dehumidification trigger
        let summer = controller.evaluate(
            EnvironmentalReading::new(35.0, 60.0, 10),
            &prefs,
            Occupancy::Occupied,
        );
        assert!(!summer.dehumidifier_on);
    }

    #[test]
    fn winter_never_dehumidifies_summer_never_humidifies() {
        let prefs = UserPreferences::default();

        // Saturated winter air still leaves the dehumidifier off
        let winter = occupied(EnvironmentalReading::new(-5.0, 99.0, 10), &prefs);
        assert!(!winter.dehumidifier_on);

        // Bone-dry summer air still leaves the humidifier off
        let summer = occupied(EnvironmentalReading::new(38.0, 5.0, 10), &prefs);
        assert!(!summer.humidifier_on);
    }

    #[test]
    fn mild_weather_idles_humidity_devices_inside_the_band() {
        let prefs = UserPreferences::default();

        let comfortable = occupied(EnvironmentalReading::new(22.0, 50.0, 10), &prefs);
        assert_eq!(comfortable.season, Season::Mild);
        assert!(!comfortable.humidifier_on);
        assert!(!comfortable.dehumidifier_on);

        // Seasonal triggers do not apply in mild weather
        let dryish = occupied(EnvironmentalReading::new(22.0, 25.0, 10), &prefs);
        assert!(!dryish.humidifier_on);

        let dampish = occupied(EnvironmentalReading::new(22.0, 70.0, 10), &prefs);
        assert!(!dampish.dehumidifier_on);
    }

    #[test]
    fn mild_weather_reacts_to_extremes() {
        let prefs = UserPreferences::default();

        let parched = occupied(EnvironmentalReading::new(22.0, 15.0, 10), &prefs);
        assert!(parched.humidifier_on);
        assert!(!parched.dehumidifier_on);

        let swampy = occupied(EnvironmentalReading::new(22.0, 85.0, 10), &prefs);
        assert!(!swampy.humidifier_on);
        assert!(swampy.dehumidifier_on);

        // Exactly at the extreme cutoffs both stay off
        let at_low = occupied(EnvironmentalReading::new(22.0, 20.0, 10), &prefs);
        assert!(!at_low.humidifier_on);
        let at_high = occupied(EnvironmentalReading::new(22.0, 80.0, 10), &prefs);
        assert!(!at_high.dehumidifier_on);
    }

    #[test]
    fn out_of_range_inputs_are_processed_not_rejected() {
        let prefs = UserPreferences::default();

        // Supersaturated reading from a drifting sensor
        let wet = occupied(EnvironmentalReading::new(35.0, 150.0, 10), &prefs);
        assert!(wet.dehumidifier_on);

        // NaN humidity fails every strict comparison - both devices off
        let nan = occupied(EnvironmentalReading::new(35.0, f32::NAN, 10), &prefs);
        assert!(!nan.humidifier_on);
        assert!(!nan.dehumidifier_on);
    }

    #[test]
    fn recommendation_tracks_conditions() {
        let controller = DeviceController::default();
        let suggested = controller.recommend_for(EnvironmentalReading::new(23.3, 40.0, 72));

        assert_eq!(suggested.ac_threshold_c, 23.5);
        assert_eq!(suggested.aqi_threshold, 72);
        assert_eq!(suggested.preferred_temp_min_c, 20.0);
        assert_eq!(suggested.preferred_temp_max_c, 26.0);
    }

    #[test]
    fn adopting_a_recommendation_leaves_devices_off_at_current_conditions() {
        let controller = DeviceController::default();
        let reading = EnvironmentalReading::new(23.3, 40.0, 72);

        let suggested = controller.recommend_for(reading);
        let state = controller.evaluate(reading, &suggested, Occupancy::Occupied);

        // Current conditions sit at (not past) the suggested thresholds
        assert!(!state.ac_on);
        assert!(!state.purifier_on);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let controller = DeviceController::default();
        let prefs = UserPreferences::default();
        let reading = EnvironmentalReading::new(31.0, 65.0, 140);

        let first = controller.evaluate(reading, &prefs, Occupancy::Occupied);
        let second = controller.evaluate(reading, &prefs, Occupancy::Occupied);
        assert_eq!(first, second);
    }

    #[test]
    fn rounding_follows_the_thermostat_step() {
        assert_eq!(round_to_step(23.3, 0.5), 23.5);
        assert_eq!(round_to_step(23.1, 0.5), 23.0);
        assert_eq!(round_to_step(-4.8, 0.5), -5.0);
        assert_eq!(round_to_step(26.0, 0.5), 26.0);
    }
}
