//! `log` backend for the browser console.
//!
//! On wasm32 records go to `console.error/warn/log/debug`. Native builds
//! install nothing, so records are dropped and tests stay quiet.

use log::LevelFilter;

/// Parse a level name ("info", "DEBUG", ...), falling back to `Info`.
pub fn level_from_str(level: &str) -> LevelFilter {
    level.trim().parse::<LevelFilter>().unwrap_or(LevelFilter::Info)
}

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};

    pub(super) struct ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let msg = format!("[{}] {}", record.target(), record.args());
            let js = wasm_bindgen::JsValue::from_str(&msg);
            match record.level() {
                Level::Error => web_sys::console::error_1(&js),
                Level::Warn => web_sys::console::warn_1(&js),
                Level::Info => web_sys::console::log_1(&js),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&js),
            }
        }

        fn flush(&self) {}
    }

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;
}

/// Install the console logger once; later calls only adjust the level.
#[cfg(target_arch = "wasm32")]
pub fn init_console_logger(level: LevelFilter) {
    // set_logger fails if already installed (e.g. engine re-init); keep the first
    let _ = log::set_logger(&console::LOGGER);
    log::set_max_level(level);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_console_logger(level: LevelFilter) {
    log::set_max_level(level);
}
