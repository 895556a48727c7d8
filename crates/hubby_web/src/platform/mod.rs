mod app;
mod dom;
mod logging;
mod timers;

use wasm_bindgen::JsValue;

use crate::WebError;

pub use app::start;

/// Maps a thrown JS value into a `WebError` for the named DOM operation.
pub(crate) fn dom_error(op: &'static str) -> impl FnOnce(JsValue) -> WebError {
    move |value| WebError::Dom {
        op,
        message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}
