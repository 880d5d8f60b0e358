// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;

use talking_clock::clock::ClockController;
use talking_clock::preferences::{HourFormat, Preferences};
use talking_clock::speech::{TimeAnnouncer, TimeAnnouncerPointer, TimeAnnouncerSharedPointer};
use talking_clock::ui::AppWindow;

struct RecordingAnnouncer {
    spoken: Rc<RefCell<Vec<String>>>,
}

impl TimeAnnouncer for RecordingAnnouncer {
    fn announce(&mut self, text: &str) {
        self.spoken.borrow_mut().push(text.to_owned());
    }
}

#[test]
fn engine_publishes_formats_and_announces() {
    i_slint_backend_testing::init_no_event_loop();

    let window = AppWindow::new().unwrap();
    let preferences = Rc::new(Preferences::default());
    let spoken = Rc::new(RefCell::new(Vec::new()));
    let announcer: TimeAnnouncerSharedPointer = Rc::new(RefCell::new(
        Box::new(RecordingAnnouncer { spoken: spoken.clone() }) as TimeAnnouncerPointer,
    ));
    let clock = ClockController::new(&window, &preferences, &announcer);

    // The first sample arrives synchronously with start, before any timer
    // interval has elapsed.
    clock.start();
    assert!(!window.get_time_text().is_empty());
    assert!(!window.get_date_text().is_empty());
    assert_eq!(spoken.borrow().len(), 1);

    let instant =
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap().and_hms_opt(13, 5, 9).unwrap();

    clock.tick_at(instant);
    assert_eq!(window.get_time_text(), "13:05:09");
    assert_eq!(window.get_date_text(), "Thursday, 07 March 2024");
    assert_eq!(spoken.borrow().len(), 2);

    // Re-publishing the same second must not re-announce.
    clock.tick_at(instant);
    assert_eq!(spoken.borrow().len(), 2);

    // A format toggle is picked up on the very next tick, no restart needed.
    preferences.set_hour_format(HourFormat::Twelve);
    clock.tick_at(instant);
    assert_eq!(window.get_time_text(), "01:05:09 PM");
    assert_eq!(spoken.borrow().len(), 3);

    // Double-stop is safe.
    clock.stop();
    clock.stop();
}
