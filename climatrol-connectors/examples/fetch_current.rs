//! Fetch Live Conditions Example
//!
//! Pulls current weather and air quality from OpenWeatherMap and runs the
//! decision engine on the result.
//!
//! ## Running the Example
//!
//! Requires a (free-tier) OpenWeatherMap API key:
//!
//! ```bash
//! OWM_API_KEY=... cargo run --example fetch_current -- London UK
//! ```

use climatrol_connectors::openweather::{OpenWeatherClient, WeatherConfig};
use climatrol_core::{Device, DeviceController, Occupancy, UserPreferences};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The library takes credentials explicitly; reading the environment is
    // this caller's choice.
    let api_key = std::env::var("OWM_API_KEY")
        .map_err(|_| "set OWM_API_KEY to an OpenWeatherMap API key")?;

    let mut args = std::env::args().skip(1);
    let city = args.next().unwrap_or_else(|| "London".into());
    let country = args.next().unwrap_or_else(|| "UK".into());

    let client = OpenWeatherClient::new(WeatherConfig::new(api_key).timeout_secs(10))?;

    println!("Fetching conditions for {city},{country}...");
    let reading = client.fetch_reading(&city, &country).await?;
    println!(
        "  {:.1}°C, {:.0}% RH, AQI {}\n",
        reading.temperature_c, reading.humidity_pct, reading.aqi
    );

    let controller = DeviceController::default();
    let state = controller.evaluate(reading, &UserPreferences::default(), Occupancy::Occupied);

    println!("Season: {}", state.season);
    for device in &Device::ALL {
        let status = if state.is_on(*device) { "ON" } else { "off" };
        println!("  {:>16}: {}", device.name(), status);
    }

    Ok(())
}
