//! Basic Decision Example
//!
//! This example demonstrates the simplest use case of Climatrol:
//! turning one environmental reading into device decisions.
//!
//! ## What You'll Learn
//!
//! - Creating a controller and user preferences
//! - Evaluating readings with occupancy
//! - Reading the resulting device snapshot
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_decision
//! ```

use climatrol_core::{
    Device, DeviceController, EnvironmentalReading, Occupancy, UserPreferences,
};

fn main() {
    println!("Climatrol Basic Decision Example");
    println!("================================\n");

    // Factory defaults: 20-26°C preferred band, AC above 27°C, AQI alert at 100
    let controller = DeviceController::default();
    let prefs = UserPreferences::default();

    println!("Preferences:");
    println!("  Preferred band: {}-{}°C", prefs.preferred_temp_min_c, prefs.preferred_temp_max_c);
    println!("  AC threshold:   {}°C", prefs.ac_threshold_c);
    println!("  AQI alert:      {}", prefs.aqi_threshold);
    println!();

    let test_cases = [
        (EnvironmentalReading::new(5.0, 20.0, 10), "Crisp winter morning, dry air"),
        (EnvironmentalReading::new(22.0, 50.0, 30), "Pleasant spring afternoon"),
        (EnvironmentalReading::new(35.0, 80.0, 120), "Muggy heatwave with smog"),
        (EnvironmentalReading::new(28.0, 45.0, 160), "Warm day, wildfire haze"),
        (EnvironmentalReading::new(12.0, 85.0, 40), "Cold rain, saturated air"),
    ];

    for (reading, description) in &test_cases {
        let state = controller.evaluate(*reading, &prefs, Occupancy::Occupied);

        println!("{description}");
        println!(
            "  {:>5.1}°C  {:>3.0}% RH  AQI {:<3}  ->  season: {}",
            reading.temperature_c, reading.humidity_pct, reading.aqi, state.season
        );
        for device in &Device::ALL {
            let status = if state.is_on(*device) { "ON" } else { "off" };
            println!("  {:>16}: {}", device.name(), status);
        }
        println!();
    }

    println!("{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Each device is decided independently from the same reading");
    println!("- The season picks the humidity strategy automatically");
    println!("- All comparisons are strict: at a threshold, devices stay off");
}
