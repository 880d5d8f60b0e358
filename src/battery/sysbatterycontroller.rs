// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use starship_battery::units::ratio::percent;
use starship_battery::Manager;

use crate::battery::batterycontroller::{BatteryController, BatteryReading};

/// Reads the charge level of the first battery the platform reports.
pub struct SysBatteryController {
    manager: Manager,
}

impl SysBatteryController {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self { manager: Manager::new()? })
    }
}

impl BatteryController for SysBatteryController {
    fn battery_level(&mut self) -> Result<BatteryReading, Box<dyn std::error::Error>> {
        let Some(battery) = self.manager.batteries()?.next() else {
            // A desktop box without any battery is not an error.
            return Ok(BatteryReading::Unknown);
        };

        let charge = battery?.state_of_charge().get::<percent>();
        Ok(BatteryReading::Percent(charge.round().clamp(0.0, 100.0) as u8))
    }
}
