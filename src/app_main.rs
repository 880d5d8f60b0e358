// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;
use std::time::Duration;

use log::{debug, info};
use slint::{ComponentHandle, Timer, TimerMode, Weak};

use crate::battery::{self, BatteryControllerSharedPointer, BatteryReading};
use crate::clock::ClockController;
use crate::preferences::{HourFormat, Preferences};
use crate::speech::{self, TimeAnnouncerSharedPointer};
use crate::ui::AppWindow;

const BATTERY_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

pub struct AppHandler {
    window: AppWindow,
    preferences: Rc<Preferences>,
    clock: ClockController,
    battery: BatteryControllerSharedPointer,
    battery_timer: Timer,
    announcer: TimeAnnouncerSharedPointer,
}

impl AppHandler {
    pub fn new() -> Result<Self, slint::PlatformError> {
        let window = AppWindow::new()?;
        let preferences = Rc::new(Preferences::default());
        let battery = battery::default_controller();
        let announcer = speech::default_announcer();
        let clock = ClockController::new(&window, &preferences, &announcer);

        Ok(Self {
            window,
            preferences,
            clock,
            battery,
            battery_timer: Timer::default(),
            announcer,
        })
    }

    /// Pushes the initial state into the window, wires the toggle callbacks
    /// and starts the clock and battery timers.
    pub fn initialize_ui(&self) {
        let preferences = &self.preferences;

        self.window.set_dark_mode(preferences.dark_mode());
        self.window.set_use_24h(preferences.hour_format() == HourFormat::TwentyFour);

        self.window.on_dark_mode_toggled({
            let preferences = preferences.clone();
            move |checked| preferences.set_dark_mode(checked)
        });

        self.window.on_hour_format_toggled({
            let preferences = preferences.clone();
            move |use_24h| {
                preferences.set_hour_format(if use_24h {
                    HourFormat::TwentyFour
                } else {
                    HourFormat::Twelve
                })
            }
        });

        // Any preference change re-renders everywhere: the window properties
        // are refreshed and the clock publishes one sample right away rather
        // than waiting out the current second.
        preferences.subscribe({
            let window_weak = self.window.as_weak();
            let preferences = preferences.clone();
            let clock = self.clock.clone();
            move || {
                if let Some(window) = window_weak.upgrade() {
                    window.set_dark_mode(preferences.dark_mode());
                    window.set_use_24h(preferences.hour_format() == HourFormat::TwentyFour);
                }
                clock.tick();
            }
        });

        Self::update_battery_text(&self.window, &self.battery);
        self.start_battery_timer();

        self.clock.start();
    }

    pub fn run(&self) -> Result<(), slint::PlatformError> {
        info!("starting event loop");
        let result = self.window.run();

        // Teardown: stop ticking and cut the speech service loose. Neither
        // depends on the other's completion.
        self.clock.stop();
        self.battery_timer.stop();
        self.announcer.borrow_mut().shutdown();

        result
    }

    fn start_battery_timer(&self) {
        let window_weak: Weak<AppWindow> = self.window.as_weak();
        let battery = self.battery.clone();

        self.battery_timer.start(TimerMode::Repeated, BATTERY_REFRESH_INTERVAL, move || {
            if let Some(window) = window_weak.upgrade() {
                Self::update_battery_text(&window, &battery);
            }
        });
    }

    fn update_battery_text(window: &AppWindow, battery: &BatteryControllerSharedPointer) {
        let reading = battery.borrow_mut().battery_level().unwrap_or_else(|e| {
            debug!("battery read failed: {}", e);
            BatteryReading::Unknown
        });

        debug!("battery level: {:?}", reading);
        window.set_battery_text(reading.display_text().into());
    }
}
