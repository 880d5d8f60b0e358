// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::rc::Rc;

/// Voice output for the clock. Announcements are fire-and-forget: nothing is
/// awaited and a failed utterance is dropped.
pub trait TimeAnnouncer {
    fn announce(&mut self, text: &str);

    /// Called once when the display is torn down.
    fn shutdown(&mut self) {}
}

pub type TimeAnnouncerPointer = Box<dyn TimeAnnouncer>;
pub type TimeAnnouncerSharedPointer = Rc<RefCell<TimeAnnouncerPointer>>;

/// Voice output for builds without a speech service.
pub struct SilentAnnouncer;

impl TimeAnnouncer for SilentAnnouncer {
    fn announce(&mut self, _text: &str) {}
}
