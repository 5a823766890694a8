//! Console output and JS conversion helpers for the editor API
//!
//! Everything that crosses the JS boundary goes through here: console
//! messages from the `wasm_*!` macros, `JsValue` (de)serialization and
//! error conversion.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::console as js_console;

/// Console method a message is written with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Write `msg` to the browser console, tagged with the editor prefix
///
/// Off wasm32 there is no console; messages go to the `log` facade.
pub fn console(level: ConsoleLevel, msg: &str) {
    let line = format!("[editor] {}", msg);

    if !cfg!(target_arch = "wasm32") {
        match level {
            ConsoleLevel::Debug => log::debug!("{}", line),
            ConsoleLevel::Info => log::info!("{}", line),
            ConsoleLevel::Warn => log::warn!("{}", line),
            ConsoleLevel::Error => log::error!("{}", line),
        }
        return;
    }

    let line = JsValue::from_str(&line);
    match level {
        ConsoleLevel::Debug => js_console::debug_1(&line),
        ConsoleLevel::Info => js_console::info_1(&line),
        ConsoleLevel::Warn => js_console::warn_1(&line),
        ConsoleLevel::Error => js_console::error_1(&line),
    }
}

/// Debug-level console message
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Debug, &format!($($arg)*))
    };
}

/// Info-level console message
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Info, &format!($($arg)*))
    };
}

/// Warning console message
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Warn, &format!($($arg)*))
    };
}

/// Error console message
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::console($crate::api::helpers::ConsoleLevel::Error, &format!($($arg)*))
    };
}

/// Convert a JS value into `T`, reporting failures as `"{context}: {error}"`
pub fn deserialize<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| to_js_error(format!("{}: {}", context, e)))
}

/// Like `deserialize`, but `undefined` and `null` give `T::default()`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(value: JsValue, context: &str) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, context)
}

/// Convert `value` into a plain JS object
pub fn serialize<T: Serialize>(value: &T, context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| to_js_error(format!("{}: {}", context, e)))
}

/// Log an error to the console and wrap it for JS
pub fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    let msg = err.to_string();
    crate::wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}
