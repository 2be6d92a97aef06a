//! Device Snapshot Produced by Each Evaluation
//!
//! ## Overview
//!
//! The engine's sole output is a [`DeviceState`]: four independent ON/OFF
//! decisions plus the season they were made under. A snapshot is recomputed
//! in full on every evaluation - there is no incremental update and no
//! carried-over state, so the result depends only on the current inputs.
//!
//! Outputs are logical states. Driving real hardware (relays, IR blasters,
//! a home-automation bus) is a separate concern for whoever consumes the
//! snapshot.

use crate::season::Season;

/// Controllable climate device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Device {
    /// Cooling when outdoor temperature passes the user threshold
    AirConditioner = 0,
    /// Adds moisture in dry conditions
    Humidifier = 1,
    /// Removes moisture in damp conditions
    Dehumidifier = 2,
    /// Filters the air when the AQI passes the user threshold
    AirPurifier = 3,
}

impl Device {
    /// All controllable devices, in display order
    pub const ALL: [Device; 4] = [
        Device::AirConditioner,
        Device::Humidifier,
        Device::Dehumidifier,
        Device::AirPurifier,
    ];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Device::AirConditioner => "air conditioner",
            Device::Humidifier => "humidifier",
            Device::Dehumidifier => "dehumidifier",
            Device::AirPurifier => "air purifier",
        }
    }
}

impl core::fmt::Display for Device {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one evaluation: four device decisions plus the inferred season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceState {
    /// Air conditioner decision
    pub ac_on: bool,
    /// Humidifier decision
    pub humidifier_on: bool,
    /// Dehumidifier decision
    pub dehumidifier_on: bool,
    /// Air purifier decision
    pub purifier_on: bool,
    /// Season the decisions were made under
    pub season: Season,
}

impl DeviceState {
    /// Snapshot with every device off
    ///
    /// The vacant-room override reports this; the season is still carried
    /// so callers can render it.
    pub const fn all_off(season: Season) -> Self {
        Self {
            ac_on: false,
            humidifier_on: false,
            dehumidifier_on: false,
            purifier_on: false,
            season,
        }
    }

    /// Decision for a single device
    pub const fn is_on(&self, device: Device) -> bool {
        match device {
            Device::AirConditioner => self.ac_on,
            Device::Humidifier => self.humidifier_on,
            Device::Dehumidifier => self.dehumidifier_on,
            Device::AirPurifier => self.purifier_on,
        }
    }

    /// True when at least one device is running
    pub fn any_on(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of devices currently running
    pub fn active_count(&self) -> usize {
        Device::ALL.iter().filter(|d| self.is_on(**d)).count()
    }
}
