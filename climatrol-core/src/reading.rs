//! Environmental Reading Supplied to Each Evaluation
//!
//! A reading is a plain value captured by some external producer - a weather
//! service connector, a local sensor, or manual entry. It carries no
//! identity and is never stored: every evaluation receives a fresh one.
//!
//! The engine deliberately accepts out-of-physical-range values (negative
//! humidity, AQI past the scale top) and runs them through the same
//! comparisons. Rejecting implausible data is the producer's decision;
//! [`EnvironmentalReading::is_plausible`] exists to support it.

use crate::constants::comfort::AQI_SCALE_MAX;

/// Snapshot of outdoor conditions for one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentalReading {
    /// Outdoor air temperature (°C)
    pub temperature_c: f32,

    /// Outdoor relative humidity (%, nominally 0-100)
    pub humidity_pct: f32,

    /// Air Quality Index (0-500 scale, higher = worse)
    pub aqi: u16,
}

impl EnvironmentalReading {
    /// Create a reading from raw values
    pub const fn new(temperature_c: f32, humidity_pct: f32, aqi: u16) -> Self {
        Self { temperature_c, humidity_pct, aqi }
    }

    /// Advisory check that all fields are physically plausible
    ///
    /// The engine itself never calls this; producers may use it to decide
    /// whether a reading is worth evaluating at all.
    pub fn is_plausible(&self) -> bool {
        self.temperature_c.is_finite()
            && self.humidity_pct.is_finite()
            && (0.0..=100.0).contains(&self.humidity_pct)
            && self.aqi <= AQI_SCALE_MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plausible_reading() {
        let reading = EnvironmentalReading::new(21.5, 45.0, 80);
        assert!(reading.is_plausible());
    }

    #[test]
    fn implausible_readings() {
        // Humidity past saturation
        assert!(!EnvironmentalReading::new(21.5, 150.0, 80).is_plausible());

        // Negative humidity from a drifting sensor
        assert!(!EnvironmentalReading::new(21.5, -5.0, 80).is_plausible());

        // AQI past the scale top
        assert!(!EnvironmentalReading::new(21.5, 45.0, 900).is_plausible());

        // Non-finite temperature
        assert!(!EnvironmentalReading::new(f32::NAN, 45.0, 80).is_plausible());
    }
}
