// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod clockcontroller;
mod timeformat;

pub use clockcontroller::ClockController;
pub use timeformat::{format_date, format_time, ClockSample};
