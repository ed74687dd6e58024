//! Thin wrappers over the `window` calls the pages make.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use wasm_bindgen::JsValue;

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(path) {
            log::error!("could not navigate to {}: {:?}", path, e);
        }
    }
}

/// Blocking message box.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Blocking yes/no prompt. Anything but an explicit yes counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// The viewer's UTC offset at `instant`, so daylight saving is applied
/// per timestamp rather than once for the whole page.
pub fn local_offset_at(instant: DateTime<Utc>) -> FixedOffset {
    let millis = JsValue::from_f64(instant.timestamp_millis() as f64);
    // getTimezoneOffset is UTC minus local, in minutes.
    let minutes = js_sys::Date::new(&millis).get_timezone_offset();
    FixedOffset::west_opt((minutes * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}
