// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::rc::Rc;

/// A charge level as shown in the status row. `Unknown` covers every failure
/// of the underlying platform service; it renders as a placeholder instead
/// of an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatteryReading {
    Percent(u8),
    Unknown,
}

impl BatteryReading {
    pub fn display_text(&self) -> String {
        match self {
            BatteryReading::Percent(percent) => format!("{}%", percent),
            BatteryReading::Unknown => "--%".to_string(),
        }
    }
}

pub trait BatteryController {
    fn battery_level(&mut self) -> Result<BatteryReading, Box<dyn std::error::Error>>;
}

pub type BatteryControllerPointer = Box<dyn BatteryController>;
pub type BatteryControllerSharedPointer = Rc<RefCell<BatteryControllerPointer>>;

/// Stand-in for targets without a reachable battery service.
pub struct DummyBatteryController;

impl BatteryController for DummyBatteryController {
    fn battery_level(&mut self) -> Result<BatteryReading, Box<dyn std::error::Error>> {
        Ok(BatteryReading::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_render_percent_or_placeholder() {
        assert_eq!(BatteryReading::Percent(87).display_text(), "87%");
        assert_eq!(BatteryReading::Percent(0).display_text(), "0%");
        assert_eq!(BatteryReading::Unknown.display_text(), "--%");
    }

    #[test]
    fn dummy_controller_reports_unknown() {
        let mut controller = DummyBatteryController;
        assert_eq!(controller.battery_level().unwrap(), BatteryReading::Unknown);
    }
}
