//! Wall-clock helpers for message timestamps.
//!
//! In the browser the clock and the display format come from JS `Date` so
//! times render in the user's locale. Elsewhere (SSR, tests) the system clock
//! is used and times render as UTC `HH:MM:SS`.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        #[allow(clippy::cast_precision_loss)]
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_millis() as f64)
    }
}

/// Time-of-day label for a message timestamp.
pub fn clock_label(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        String::from(date.to_locale_time_string("default"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        utc_clock(timestamp_ms)
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn utc_clock(timestamp_ms: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let secs = if timestamp_ms.is_finite() && timestamp_ms > 0.0 { (timestamp_ms / 1000.0) as u64 } else { 0 };
    let of_day = secs % 86_400;
    format!("{:02}:{:02}:{:02}", of_day / 3600, (of_day % 3600) / 60, of_day % 60)
}
