//! Timestamp display helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render Unix seconds as a locale date-time string in the browser; native
/// builds fall back to the raw seconds.
pub fn format_unix_seconds(secs: i64) -> String {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_precision_loss)]
        let millis = secs as f64 * 1000.0;
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis));
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "csr"))]
    {
        format!("{secs}")
    }
}
