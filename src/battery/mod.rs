// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod batterycontroller;

#[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
mod sysbatterycontroller;

pub use batterycontroller::{
    BatteryController, BatteryControllerPointer, BatteryControllerSharedPointer, BatteryReading,
    DummyBatteryController,
};

#[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
pub use sysbatterycontroller::SysBatteryController;

use std::cell::RefCell;
use std::rc::Rc;

/// Picks the platform battery source, falling back to the dummy controller
/// where no battery service is reachable.
pub fn default_controller() -> BatteryControllerSharedPointer {
    #[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
    match SysBatteryController::new() {
        Ok(controller) => {
            return Rc::new(RefCell::new(Box::new(controller) as BatteryControllerPointer))
        }
        Err(e) => log::warn!("battery service unavailable: {}", e),
    }

    Rc::new(RefCell::new(Box::new(DummyBatteryController) as BatteryControllerPointer))
}
