// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use log::warn;
use tts::Tts;

use crate::speech::announcer::TimeAnnouncer;

/// Speaks through the host text-to-speech service.
pub struct SpeechAnnouncer {
    tts: Tts,
}

impl SpeechAnnouncer {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self { tts: Tts::default()? })
    }
}

impl TimeAnnouncer for SpeechAnnouncer {
    fn announce(&mut self, text: &str) {
        // interrupt = false: let an utterance that is still playing finish
        if let Err(e) = self.tts.speak(text, false) {
            warn!("text-to-speech failed: {}", e);
        }
    }

    fn shutdown(&mut self) {
        if let Err(e) = self.tts.stop() {
            warn!("stopping text-to-speech failed: {}", e);
        }
    }
}
