//! Occupancy Simulation Example
//!
//! This example demonstrates the occupancy override with a simulated
//! presence source: the same harsh conditions evaluated over a day of
//! comings and goings.
//!
//! ## What You'll Learn
//!
//! - Plugging an `OccupancySource` into the evaluation loop
//! - How the vacant-room override saves energy
//! - Why an explicit seed makes simulation runs reproducible
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_occupancy_simulation
//! ```

use climatrol_core::{
    DeviceController, EnvironmentalReading, OccupancySource, SimulatedOccupancy, UserPreferences,
};

fn main() {
    println!("Climatrol Occupancy Simulation Example");
    println!("======================================\n");

    let controller = DeviceController::default();
    let prefs = UserPreferences::default();

    // Conditions that would run three devices around the clock
    let heatwave = EnvironmentalReading::new(35.0, 80.0, 120);

    // Home roughly 60% of the time; explicit seed keeps runs identical
    let mut presence = SimulatedOccupancy::new(0x5EED).with_occupied_ratio(0.6);

    let samples = 24;
    let mut device_hours = 0;
    let mut occupied_hours = 0;

    println!("Hourly simulation ({samples} samples):");
    for hour in 0..samples {
        let occupancy = presence.sample();
        let state = controller.evaluate(heatwave, &prefs, occupancy);

        if occupancy.is_occupied() {
            occupied_hours += 1;
        }
        device_hours += state.active_count();

        println!(
            "  {hour:02}:00  room {:8}  devices running: {}",
            occupancy.name(),
            state.active_count()
        );
    }

    let always_on = samples * 3; // three devices would run nonstop if always home
    println!();
    println!("Occupied {occupied_hours}/{samples} hours");
    println!("Device-hours used: {device_hours} (vs {always_on} without the override)");
    println!(
        "Energy saved by the vacancy override: {:.0}%",
        100.0 * (1.0 - device_hours as f32 / always_on as f32)
    );
}
