// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use slint::{ComponentHandle, Timer, TimerMode, Weak};

use crate::clock::timeformat::ClockSample;
use crate::preferences::Preferences;
use crate::speech::TimeAnnouncerSharedPointer;
use crate::ui::AppWindow;

/// Drives the clock face: one repeating one-second timer that samples the
/// wall clock, formats it per the current preferences and publishes the
/// result to the window. The hour format is re-read on every tick, so a
/// toggle never shows stale formatting.
#[derive(Clone)]
pub struct ClockController {
    inner: Rc<ClockInner>,
}

struct ClockInner {
    timer: Timer,
    window: Weak<AppWindow>,
    preferences: Rc<Preferences>,
    announcer: TimeAnnouncerSharedPointer,
    last_announced: RefCell<Option<String>>,
}

impl ClockController {
    pub fn new(
        window: &AppWindow,
        preferences: &Rc<Preferences>,
        announcer: &TimeAnnouncerSharedPointer,
    ) -> Self {
        Self {
            inner: Rc::new(ClockInner {
                timer: Timer::default(),
                window: window.as_weak(),
                preferences: preferences.clone(),
                announcer: announcer.clone(),
                last_announced: RefCell::new(None),
            }),
        }
    }

    /// Begins the repeating one-second tick. The first sample is published
    /// synchronously, so the window never shows an empty time.
    pub fn start(&self) {
        self.tick();

        let weak = Rc::downgrade(&self.inner);
        self.inner.timer.start(TimerMode::Repeated, Duration::from_secs(1), move || {
            if let Some(inner) = weak.upgrade() {
                inner.tick_at(Local::now().naive_local());
            }
        });
    }

    /// Publishes a sample of the current wall clock instant.
    pub fn tick(&self) {
        self.inner.tick_at(Local::now().naive_local());
    }

    /// Publishes a sample of the given instant.
    pub fn tick_at(&self, now: NaiveDateTime) {
        self.inner.tick_at(now);
    }

    /// Cancels the tick timer. Safe to call more than once; no further ticks
    /// are delivered afterwards.
    pub fn stop(&self) {
        self.inner.timer.stop();
    }
}

impl ClockInner {
    fn tick_at(&self, now: NaiveDateTime) {
        let Some(window) = self.window.upgrade() else { return };

        let sample = ClockSample::at(now, self.preferences.hour_format());

        // Announce only when the displayed time actually changed, not on
        // every re-publish.
        let mut last = self.last_announced.borrow_mut();
        if last.as_deref() != Some(sample.time_text.as_str()) {
            self.announcer.borrow_mut().announce(&sample.time_text);
            *last = Some(sample.time_text.clone());
        }

        window.set_time_text(sample.time_text.into());
        window.set_date_text(sample.date_text.into());
    }
}
