// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::NaiveDateTime;

use crate::preferences::HourFormat;

/// The strings shown by the clock face, derived from one wall clock instant.
pub struct ClockSample {
    pub time_text: String,
    pub date_text: String,
}

impl ClockSample {
    pub fn at(now: NaiveDateTime, format: HourFormat) -> Self {
        Self { time_text: format_time(now, format), date_text: format_date(now) }
    }
}

pub fn format_time(now: NaiveDateTime, format: HourFormat) -> String {
    match format {
        HourFormat::TwentyFour => now.format("%H:%M:%S").to_string(),
        HourFormat::Twelve => now.format("%I:%M:%S %p").to_string(),
    }
}

pub fn format_date(now: NaiveDateTime) -> String {
    now.format("%A, %d %B %Y").to_string()
}
