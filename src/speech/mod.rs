// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod announcer;

#[cfg(all(feature = "speech", not(target_arch = "wasm32"), not(target_os = "android")))]
mod speechannouncer;

pub use announcer::{
    SilentAnnouncer, TimeAnnouncer, TimeAnnouncerPointer, TimeAnnouncerSharedPointer,
};

#[cfg(all(feature = "speech", not(target_arch = "wasm32"), not(target_os = "android")))]
pub use speechannouncer::SpeechAnnouncer;

use std::cell::RefCell;
use std::rc::Rc;

/// Picks the voice output for this build: the host text-to-speech service
/// when the `speech` feature is enabled and the target has one, otherwise
/// the silent stand-in.
pub fn default_announcer() -> TimeAnnouncerSharedPointer {
    #[cfg(all(feature = "speech", not(target_arch = "wasm32"), not(target_os = "android")))]
    match SpeechAnnouncer::new() {
        Ok(announcer) => {
            return Rc::new(RefCell::new(Box::new(announcer) as TimeAnnouncerPointer))
        }
        Err(e) => log::warn!("speech service unavailable: {}", e),
    }

    Rc::new(RefCell::new(Box::new(SilentAnnouncer) as TimeAnnouncerPointer))
}
