//! Recommended Settings Example
//!
//! This example demonstrates the advisory side of the controller:
//! deriving a suggested preference set from current conditions, and what
//! adopting it changes.
//!
//! ## What You'll Learn
//!
//! - Generating a recommendation from a reading
//! - Comparing decisions before and after adoption
//! - Why recommendations never mutate anything by themselves
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_recommend_settings
//! ```

use climatrol_core::{DeviceController, EnvironmentalReading, Occupancy, UserPreferences};

fn main() {
    println!("Climatrol Recommended Settings Example");
    println!("======================================\n");

    let controller = DeviceController::default();

    // A warm, hazy afternoon
    let reading = EnvironmentalReading::new(29.4, 55.0, 130);
    println!(
        "Current conditions: {:.1}°C, {:.0}% RH, AQI {}\n",
        reading.temperature_c, reading.humidity_pct, reading.aqi
    );

    // With factory defaults both threshold devices run
    let defaults = UserPreferences::default();
    let before = controller.evaluate(reading, &defaults, Occupancy::Occupied);
    println!("With factory defaults (AC > {}°C, AQI > {}):", defaults.ac_threshold_c, defaults.aqi_threshold);
    println!("  AC: {}   purifier: {}\n", onoff(before.ac_on), onoff(before.purifier_on));

    // The suggestion centers thresholds on what we observe right now
    let suggested = controller.recommend_for(reading);
    println!("Suggested preferences:");
    println!("  Preferred band: {}-{}°C", suggested.preferred_temp_min_c, suggested.preferred_temp_max_c);
    println!("  AC threshold:   {}°C (current temperature, thermostat step)", suggested.ac_threshold_c);
    println!("  AQI alert:      {} (current AQI)\n", suggested.aqi_threshold);

    // Nothing was stored anywhere - adopting is the caller's decision
    let after = controller.evaluate(reading, &suggested, Occupancy::Occupied);
    println!("After adopting the suggestion:");
    println!("  AC: {}   purifier: {}", onoff(after.ac_on), onoff(after.purifier_on));
    println!("\nDevices rest at current conditions and react once they worsen.");
}

fn onoff(on: bool) -> &'static str {
    if on { "ON" } else { "off" }
}
