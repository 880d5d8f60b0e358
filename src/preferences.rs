// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HourFormat {
    Twelve,
    #[default]
    TwentyFour,
}

/// In-memory holder for the two user toggles. Not persisted; the defaults
/// (dark mode on, 24-hour clock) apply on every start.
///
/// Subscribers registered with [`Preferences::subscribe`] run after every
/// setter call, including one that stores the value already present.
pub struct Preferences {
    dark_mode: Cell<bool>,
    hour_format: Cell<HourFormat>,
    listeners: RefCell<Vec<Box<dyn Fn()>>>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new(true, HourFormat::TwentyFour)
    }
}

impl Preferences {
    pub fn new(dark_mode: bool, hour_format: HourFormat) -> Self {
        Self {
            dark_mode: Cell::new(dark_mode),
            hour_format: Cell::new(hour_format),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode.get()
    }

    pub fn hour_format(&self) -> HourFormat {
        self.hour_format.get()
    }

    pub fn set_dark_mode(&self, value: bool) {
        self.dark_mode.set(value);
        self.notify();
    }

    pub fn set_hour_format(&self, value: HourFormat) {
        self.hour_format.set(value);
        self.notify();
    }

    /// Registers a listener that is invoked after every preference change.
    /// Listeners must not subscribe further listeners from within the
    /// notification.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self) {
        for listener in self.listeners.borrow().iter() {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn defaults_are_dark_mode_and_twenty_four_hours() {
        let preferences = Preferences::default();
        assert!(preferences.dark_mode());
        assert_eq!(preferences.hour_format(), HourFormat::TwentyFour);
    }

    #[test]
    fn setters_store_the_value_and_notify() {
        let preferences = Preferences::default();
        let notified = Rc::new(Cell::new(0u32));

        preferences.subscribe({
            let notified = notified.clone();
            move || notified.set(notified.get() + 1)
        });

        preferences.set_dark_mode(false);
        assert!(!preferences.dark_mode());
        assert_eq!(notified.get(), 1);

        preferences.set_hour_format(HourFormat::Twelve);
        assert_eq!(preferences.hour_format(), HourFormat::Twelve);
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn overwriting_with_the_same_value_still_notifies() {
        let preferences = Preferences::default();
        let notified = Rc::new(Cell::new(0u32));

        preferences.subscribe({
            let notified = notified.clone();
            move || notified.set(notified.get() + 1)
        });

        preferences.set_dark_mode(true);
        assert_eq!(notified.get(), 1);
    }

    #[test]
    fn every_subscriber_is_notified() {
        let preferences = Preferences::default();
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));

        preferences.subscribe({
            let first = first.clone();
            move || first.set(true)
        });
        preferences.subscribe({
            let second = second.clone();
            move || second.set(true)
        });

        preferences.set_hour_format(HourFormat::Twelve);
        assert!(first.get());
        assert!(second.get());
    }
}
