// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

pub mod ui {
    slint::include_modules!();
}

mod app_main;

pub mod battery;
pub mod clock;
pub mod preferences;
pub mod speech;

use crate::app_main::AppHandler;

pub fn main() -> Result<(), slint::PlatformError> {
    log::info!("starting talking clock");

    let app = AppHandler::new()?;
    app.initialize_ui();
    app.run()
}

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
fn android_main(android_app: slint::android::AndroidApp) {
    android_logger::init_once(android_logger::Config::default().with_max_level(
        if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info },
    ));

    // initialize android before creating the main window
    slint::android::init(android_app).unwrap();
    main().unwrap();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() {
    // This provides better error messages in debug mode.
    // It's disabled in release mode so it doesn't bloat up the file size.
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    if let Err(e) = main() {
        log::error!("Runtime error: {}", e);
    }
}
