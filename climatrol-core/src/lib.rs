//! Core decision engine for Climatrol
//!
//! Maps outdoor conditions (temperature, humidity, air quality), room
//! occupancy, and user preferences to ON/OFF states for four climate
//! devices: air conditioner, humidifier, dehumidifier, air purifier.
//!
//! Key constraints:
//! - Pure functions only: no I/O, no clocks, no state between calls
//! - `no_std` compatible (the `std` feature is on by default)
//! - O(1) evaluation, safe to call from concurrent contexts
//!
//! ```rust
//! use climatrol_core::{DeviceController, EnvironmentalReading, Occupancy, UserPreferences};
//!
//! let controller = DeviceController::default();
//! let prefs = UserPreferences::default();
//!
//! // Evaluate the current conditions
//! let reading = EnvironmentalReading::new(31.5, 72.0, 140);
//! let state = controller.evaluate(reading, &prefs, Occupancy::Occupied);
//!
//! if state.ac_on {
//!     // switch the AC relay, render the dashboard tile, ...
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod controller;
pub mod errors;
pub mod occupancy;
pub mod preferences;
pub mod reading;
pub mod season;
pub mod state;

// Public API
pub use controller::{DeviceController, HumidityBands};
pub use errors::{PreferencesError, PreferencesResult};
pub use occupancy::{FixedOccupancy, Occupancy, OccupancySource, SimulatedOccupancy};
pub use preferences::UserPreferences;
pub use reading::EnvironmentalReading;
pub use season::{Season, SeasonClassifier};
pub use state::{Device, DeviceState};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
